pub mod generate;

use crate::{Cli, Result};

pub fn execute(cli: Cli) -> Result<()> {
    generate::execute(cli)
}
