//! Command-line options shared by the interactive runner and the simulator.

use clap::Args;

use crate::core::{MachineError, SlotMachine};
use crate::types::SymbolKind;

/// Options that decide how the machine is built.
#[derive(Debug, Clone, Args)]
pub struct MachineArgs {
    /// RNG seed. The same seed replays the same symbols.
    #[arg(long, default_value_t = 1, value_name = "N")]
    pub seed: u32,

    /// Comma-separated subset of symbol kinds to draw from (e.g. `A,K,H1`). Defaults to all 18.
    #[arg(long, value_delimiter = ',', value_name = "KINDS")]
    pub symbols: Vec<SymbolKind>,

    /// Tease this kind into the rollovers of the first spin.
    #[arg(long, value_name = "KIND")]
    pub force: Option<SymbolKind>,
}

impl Default for MachineArgs {
    fn default() -> Self {
        Self {
            seed: 1,
            symbols: Vec::new(),
            force: None,
        }
    }
}

impl MachineArgs {
    /// Build a machine from these options.
    pub fn build(&self) -> Result<SlotMachine, MachineError> {
        let mut machine = if self.symbols.is_empty() {
            SlotMachine::new(self.seed)
        } else {
            SlotMachine::with_catalogue(self.seed, self.symbols.clone())?
        };
        if let Some(kind) = self.force {
            machine.force_symbol(kind);
        }
        Ok(machine)
    }
}
