#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("--write needs file paths; stdin can only be printed")]
    WriteStdin,

    #[error("{0} files given; use --write, --check or --json to process more than one")]
    MultipleTargets(usize),

    #[error("{0} document(s) would change")]
    WouldChange(usize),
}
