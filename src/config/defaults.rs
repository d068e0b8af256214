/// Executable name of the rasterization tool (Ghostscript)
pub const GS_PROGRAM: &str = "gs";

/// Executable name of the metadata inspection tool (poppler)
pub const PDFINFO_PROGRAM: &str = "pdfinfo";

/// Ghostscript PDFSETTINGS preset; "screen" is the lowest quality
pub const PDF_SETTINGS: &str = "screen";

/// PDF compatibility level of the rewritten file
pub const COMPATIBILITY_LEVEL: &str = "1.4";

/// Metadata key checked for the producer signature
pub const PRODUCER_KEY: &str = "Producer";

/// Substring of the Producer value written by Ghostscript
pub const PRODUCER_SIGNATURE: &str = "Ghostscript";

/// Prefix of the per-run scratch directory
pub const SCRATCH_PREFIX: &str = "compresspdf";
