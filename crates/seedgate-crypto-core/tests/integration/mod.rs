mod keystore_files;
mod totp_roundtrip;
