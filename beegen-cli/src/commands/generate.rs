use crate::{Cli, Result};

pub fn execute(cli: Cli) -> Result<()> {
    let deployment = beegen::resolve(cli.into_invocation())?;
    let file_name = beegen::output_file_name(&deployment);
    println!(
        "Generate deploy script for stage '{}: {}'",
        deployment.stage, file_name
    );
    beegen::generate(&deployment, ".")?;
    Ok(())
}
