use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "compresspdf")]
#[command(
    about = "Compresses one or more pdf files in place, if they don't appear to have been processed already.  Requires that gs and pdfinfo are in the PATH",
    override_usage = "compresspdf [global options] <pdf files> [pdf files...]",
    disable_version_flag = true
)]
pub struct Args {
    /// PDF files to compress in place
    pub files: Vec<PathBuf>,

    /// Attempts compression even if the file may have already been compressed
    #[arg(short, long)]
    pub force: bool,

    /// No output unless there is an error
    #[arg(short, long)]
    pub quiet: bool,

    /// Extra output
    #[arg(short, long)]
    pub verbose: bool,
}
