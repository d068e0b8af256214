use crate::cli::Args;

/// Run-wide options, fixed for the duration of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Compress even if the file looks already compressed
    pub force: bool,
    /// Print a line per skipped, grown, or shrunk file
    pub verbose: bool,
    /// Suppress the summary line
    pub quiet: bool,
}

impl Settings {
    pub fn from_args(args: &Args) -> Self {
        Self {
            force: args.force,
            verbose: args.verbose,
            quiet: args.quiet,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_args() {
        let args = Args::try_parse_from(["compresspdf", "-q", "-f", "x.pdf"]).unwrap();
        let settings = Settings::from_args(&args);
        assert!(settings.force);
        assert!(settings.quiet);
        assert!(!settings.verbose);
    }

    #[test]
    fn test_builders() {
        let settings = Settings::default().with_verbose(true).with_quiet(true);
        assert_eq!(
            settings,
            Settings {
                force: false,
                verbose: true,
                quiet: true
            }
        );
    }
}
