mod envelope;
mod totp;
