use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "beegen-cli")]
#[command(about = "Generate standalone deploy scripts for bee services")]
pub struct Cli {
    /// Service to deploy, e.g. jwt-authoriser
    #[arg(long)]
    pub service_name: Option<String>,

    /// Release version to bake into the script, e.g. 1.20.30
    #[arg(long)]
    pub release_version: Option<String>,

    /// Target stage, also part of the output file name
    #[arg(long)]
    pub stage: Option<String>,

    /// AWS region used while generating, defaults to eu-west-1
    #[arg(long)]
    pub region: Option<String>,

    /// Inline parameter list, key1=value1,key2=value2,...
    #[arg(long)]
    pub parameters: Option<String>,

    /// YAML file supplying the parameter set
    #[arg(long)]
    pub parameters_file: Option<String>,
}

impl Cli {
    pub fn into_invocation(self) -> beegen::Invocation {
        beegen::Invocation {
            service_name: self.service_name,
            release_version: self.release_version,
            stage: self.stage,
            region: self.region,
            parameters: self.parameters,
            parameters_file: self.parameters_file,
        }
    }
}
