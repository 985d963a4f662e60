#[derive(clap::Parser)]
#[command(about = "attach user program symbols to a kernel debugging session")]
pub struct Args {
    /// Logical name of the user program to attach; starts an interactive
    /// prompt when omitted
    #[arg(value_name = "PROGRAM")]
    pub program: Option<String>,

    /// Primary directory searched for user binaries
    #[arg(long, value_name = "DIR", default_value = "user/usr/bin")]
    pub user_dir: String,

    /// Fallback directory searched after the primary one
    #[arg(long, value_name = "DIR", default_value = "user/bin")]
    pub fallback_dir: String,

    /// Fixed path used for the init program, bypassing the search
    #[arg(long, value_name = "FILE", default_value = "user/sbin/init.exec")]
    pub init_path: String,

    /// Suffix appended to program names during the search
    #[arg(long, value_name = "SUFFIX", default_value = ".exec")]
    pub suffix: String,

    /// Binary-header inspector used to read the .text VMA
    #[arg(long, value_name = "BIN", default_value = "objdump")]
    pub objdump: String,

    /// Write directives to this command file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub out: Option<String>,
}
