//! Migration checksums
//!
//! SHA256 over the migration SQL, recorded in schema_version so an edited
//! migration file is detectable after the fact

use sha2::{Digest, Sha256};

/// Hex-encoded SHA256 of a migration's SQL text
pub fn compute_checksum(sql: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sql.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_is_stable_and_content_sensitive() {
        let sql = "CREATE TABLE reservations (id TEXT PRIMARY KEY, status TEXT NOT NULL)";
        let checksum = compute_checksum(sql);

        assert_eq!(checksum.len(), 64); // SHA256 as hex
        assert_eq!(checksum, compute_checksum(sql));

        // Any edit to the SQL shows up as a different checksum
        let edited = sql.replace("TEXT NOT NULL", "TEXT");
        assert_ne!(checksum, compute_checksum(&edited));
    }
}
