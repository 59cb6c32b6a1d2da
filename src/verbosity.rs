//! Output verbosity derived from the global CLI flags.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Errors and requested content only.
    Quiet,
    /// Status messages and progress.
    #[default]
    Normal,
    /// Everything, including per-chunk details.
    Verbose,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Whether status output and progress bars should be shown.
    pub fn show_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    pub fn is_verbose(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
