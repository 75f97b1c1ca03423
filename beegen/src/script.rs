use crate::{Deployment, Result};
use std::path::Path;

/// Argument handling embedded at the top of every generated script. The
/// script re-validates `--region` at its own invocation time and forwards an
/// optional `--profile`; neither is baked in at generation time.
const ARGUMENT_FRAGMENT: &str = r#"let optionalParams = '';
if (!argv.region || typeof (argv.region) !== 'string') {
    console.error(`ERROR: Missing region, use --region <region>, e.g. --region @@REGION@@`);
    process.exit(1);
}
optionalParams = optionalParams.concat(`--region ${argv.region}`);
if (argv.profile && typeof (argv.profile) === 'string') {
    optionalParams = optionalParams.concat(` --profile ${argv.profile}`);
}"#;

const SCRIPT_TEMPLATE: &str = r#"// This file has been generated by beegen.

const shell = require('shelljs');
const argv = require('yargs').argv;

@@ARGUMENTS@@

const shellResult = shell.exec(`bee deploy-service @@COMMAND@@ ${optionalParams}`);
process.exit(shellResult.code);
"#;

/// Render the argument-handling fragment. `region` only feeds the example
/// shown in the fragment's error hint.
pub fn argument_fragment(region: &str) -> String {
    ARGUMENT_FRAGMENT.replace("@@REGION@@", region)
}

/// Render the full source text of the standalone deploy script, with the
/// resolved service name, version, stage and serialized parameters baked
/// into the `bee deploy-service` invocation.
pub fn render_deploy_script(deployment: &Deployment) -> String {
    let command = format!(
        "--service-name {} --release-version {} {} --stage {}",
        deployment.service_name,
        deployment.version,
        deployment.params.to_cli_option(),
        deployment.stage,
    );
    SCRIPT_TEMPLATE
        .replace("@@ARGUMENTS@@", &argument_fragment(&deployment.region))
        .replace("@@COMMAND@@", &command)
}

pub fn output_file_name(deployment: &Deployment) -> String {
    format!(
        "deploy-{}-{}-to-{}.js",
        deployment.service_name, deployment.version, deployment.stage
    )
}

/// Write the rendered script into `dir`, overwriting any previous copy.
/// Returns the output file name.
pub fn generate(deployment: &Deployment, dir: impl AsRef<Path>) -> Result<String> {
    let file_name = output_file_name(deployment);
    let script = render_deploy_script(deployment);
    std::fs::write(dir.as_ref().join(&file_name), script)?;
    Ok(file_name)
}
