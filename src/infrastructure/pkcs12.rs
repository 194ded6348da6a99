//! PKCS#12 encoder backed by OpenSSL
//!
//! Key and certificate encryption, MAC digest and iteration counts are the
//! OpenSSL defaults for `PKCS12_create` (AES-256-CBC with PBKDF2 and a
//! SHA-256 MAC on OpenSSL 3.x).

use openssl::pkcs12::Pkcs12;
use openssl::pkey::PKey;
use openssl::x509::X509;
use tracing::{debug, instrument};

use crate::infrastructure::traits::Pkcs12Encoder;
use crate::infrastructure::{InfraError, InfraResult};

#[derive(Debug, Default)]
pub struct OpensslEncoder;

impl Pkcs12Encoder for OpensslEncoder {
    #[instrument(level = "debug", skip_all)]
    fn encode(&self, privkey_pem: &[u8], cert_pem: &[u8], password: &str) -> InfraResult<Vec<u8>> {
        let cert = X509::from_pem(cert_pem).map_err(InfraError::Certificate)?;
        debug!("certificate subject: {:?}", cert.subject_name());

        let pkey = PKey::private_key_from_pem(privkey_pem).map_err(InfraError::PrivateKey)?;
        debug!("private key type: {:?}", pkey.id());

        // build2 rejects a key that does not match the certificate's public key
        let pkcs12 = Pkcs12::builder()
            .pkey(&pkey)
            .cert(&cert)
            .build2(password)
            .map_err(InfraError::Assemble)?;

        pkcs12.to_der().map_err(InfraError::Encode)
    }
}
