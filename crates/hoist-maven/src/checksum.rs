//! Checksum sidecars for uploaded artifacts (SHA-1, SHA-256, MD5).

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// The sidecar set deployed next to each uploaded file.
///
/// Maven deployments conventionally ship `.sha1` and `.md5`; newer
/// repository managers also index `.sha256`. Each entry is
/// `(extension, hex digest)`.
pub fn sidecars(data: &[u8]) -> Vec<(&'static str, String)> {
    vec![
        ("sha1", hex_sha1(data)),
        ("md5", hex_md5(data)),
        ("sha256", hex_sha256(data)),
    ]
}

pub fn hex_sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

pub fn hex_sha1(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

pub fn hex_md5(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_computation() {
        let hash = hex_sha256(b"hello world");
        assert_eq!(
            hash,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn sha1_computation() {
        let hash = hex_sha1(b"hello world");
        assert_eq!(hash, "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");
    }

    #[test]
    fn md5_computation() {
        let hash = hex_md5(b"hello world");
        assert_eq!(hash, "5eb63bbbe01eeed093cb22bb8f5acdc3");
    }

    #[test]
    fn sidecar_extensions() {
        let exts: Vec<_> = sidecars(b"data").into_iter().map(|(e, _)| e).collect();
        assert_eq!(exts, vec!["sha1", "md5", "sha256"]);
    }
}
