//! Configuration constants.
//!
//! This module contains the defaults and fixed values used by the export
//! pipeline.

/// Default `host:path` destination for the compressed results
pub const DEFAULT_DESTINATION: &str = "localhost:/tmp";

/// Default SSH identity file handed to `scp -i`
pub const DEFAULT_IDENTITY_KEY: &str = "id_rsa";

/// Default directory the results file is written to
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Date format used for the window bounds, the file tag and `--latestdate`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Prefix of the results file name (`results-<start-date>.tsv`)
pub const OUTPUT_FILE_PREFIX: &str = "results-";

/// Extension of the uncompressed results file
pub const OUTPUT_FILE_EXTENSION: &str = "tsv";

/// Suffix the compression tool appends to the results file
pub const COMPRESSED_SUFFIX: &str = ".gz";

/// Compression tool and arguments (`gzip -f <file>`)
pub const COMPRESS_PROGRAM: &str = "gzip";
/// Overwrite any pre-existing compressed artifact
pub const COMPRESS_FORCE_FLAG: &str = "-f";

/// Secure-copy tool (`scp -i <key> <file>.gz <destination>`)
pub const DELIVERY_PROGRAM: &str = "scp";
/// Identity file flag
pub const DELIVERY_IDENTITY_FLAG: &str = "-i";

/// Export query.
///
/// Columns are cast to a character type so numeric ids and DATETIME values
/// decode as strings through the `sqlx` `Any` driver on both MySQL and SQLite.
/// The window is half-open: `notBefore >= start AND notBefore < end`.
pub const ISSUED_NAMES_QUERY: &str = "SELECT CAST(id AS CHAR) AS id, \
        CAST(reversedName AS CHAR) AS reversedName, \
        CAST(notBefore AS CHAR) AS notBefore, \
        CAST(serial AS CHAR) AS serial \
     FROM issuedNames \
     WHERE notBefore >= ? AND notBefore < ?";
