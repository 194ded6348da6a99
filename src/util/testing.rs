//! Test support: logging setup and throwaway key material

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Once;

use openssl::asn1::Asn1Time;
use openssl::bn::BigNum;
use openssl::ec::{EcGroup, EcKey};
use openssl::error::ErrorStack;
use openssl::hash::MessageDigest;
use openssl::nid::Nid;
use openssl::pkey::PKey;
use openssl::x509::{X509Builder, X509NameBuilder};
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "trace");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// PEM-encoded private key and matching self-signed certificate.
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub privkey_pem: Vec<u8>,
    pub cert_pem: Vec<u8>,
}

/// Generate a P-256 key and a self-signed certificate for `common_name`.
///
/// # Panics
/// If OpenSSL fails to generate the material.
pub fn generate_key_pair(common_name: &str) -> KeyPair {
    build_key_pair(common_name).expect("generate test key pair")
}

/// Write a fresh key pair into `dir` as `<stem>.key` and `<stem>.pem`.
///
/// Returns `(privkey_path, cert_path)`.
pub fn write_key_pair(dir: &Path, stem: &str) -> (PathBuf, PathBuf) {
    let pair = generate_key_pair(stem);
    let privkey_path = dir.join(format!("{}.key", stem));
    let cert_path = dir.join(format!("{}.pem", stem));
    std::fs::write(&privkey_path, &pair.privkey_pem).expect("write test private key");
    std::fs::write(&cert_path, &pair.cert_pem).expect("write test certificate");
    (privkey_path, cert_path)
}

fn build_key_pair(common_name: &str) -> Result<KeyPair, ErrorStack> {
    let group = EcGroup::from_curve_name(Nid::X9_62_PRIME256V1)?;
    let pkey = PKey::from_ec_key(EcKey::generate(&group)?)?;

    let mut name = X509NameBuilder::new()?;
    name.append_entry_by_text("CN", common_name)?;
    let name = name.build();

    let mut builder = X509Builder::new()?;
    builder.set_version(2)?;
    let serial = BigNum::from_u32(1)?.to_asn1_integer()?;
    builder.set_serial_number(&serial)?;
    builder.set_subject_name(&name)?;
    builder.set_issuer_name(&name)?;
    builder.set_pubkey(&pkey)?;
    let not_before = Asn1Time::days_from_now(0)?;
    builder.set_not_before(&not_before)?;
    let not_after = Asn1Time::days_from_now(30)?;
    builder.set_not_after(&not_after)?;
    builder.sign(&pkey, MessageDigest::sha256())?;

    Ok(KeyPair {
        privkey_pem: pkey.private_key_to_pem_pkcs8()?,
        cert_pem: builder.build().to_pem()?,
    })
}
