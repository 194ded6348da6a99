//! CLI argument definitions using clap

use std::ffi::OsString;
use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{ArgAction, Parser, ValueHint};

use crate::domain::PfxRequest;

/// Bundle a PEM private key and certificate into a password-protected PKCS#12 (PFX) archive.
///
/// The archive password is read from the PKCS_PASSWORD environment variable.
#[derive(Parser, Debug)]
#[command(name = "pfxgen")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Path to private key PEM
    #[arg(short = 'p', long, value_name = "PATH", value_parser = OsStringValueParser::new().map(trimmed_path), value_hint = ValueHint::FilePath)]
    pub privkey: Option<PathBuf>,

    /// Path to certificate PEM
    #[arg(short = 'c', long, value_name = "PATH", value_parser = OsStringValueParser::new().map(trimmed_path), value_hint = ValueHint::FilePath)]
    pub cert: Option<PathBuf>,

    /// Path for the pfx (default: certificate path with .pem replaced by .pfx)
    #[arg(short = 'o', long, value_name = "PATH", value_parser = OsStringValueParser::new().map(trimmed_path), value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite the pfx if it already exists
    #[arg(short = 'C', long)]
    pub clobber: bool,

    /// Run everything except writing the pfx
    #[arg(short = 'd', long)]
    pub dryrun: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,

    /// Print help
    #[arg(short = 'h', long, short_alias = '?', action = ArgAction::Help)]
    pub help: Option<bool>,
}

impl Cli {
    /// The unvalidated generation request carried by these arguments.
    pub fn request(&self) -> PfxRequest {
        PfxRequest {
            privkey: self.privkey.clone(),
            cert: self.cert.clone(),
            output: self.output.clone(),
            clobber: self.clobber,
            dry_run: self.dryrun,
        }
    }
}

/// Strip surrounding whitespace without requiring the path to be UTF-8.
#[cfg(unix)]
fn trimmed_path(raw: OsString) -> PathBuf {
    use std::os::unix::ffi::OsStringExt;

    let bytes = raw.into_vec();
    let is_space = |b: &u8| matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c);
    let start = bytes.iter().position(|b| !is_space(b)).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|b| !is_space(b)).map_or(start, |i| i + 1);
    PathBuf::from(OsString::from_vec(bytes[start..end].to_vec()))
}

#[cfg(not(unix))]
fn trimmed_path(raw: OsString) -> PathBuf {
    match raw.to_str() {
        Some(s) => PathBuf::from(s.trim()),
        None => PathBuf::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;
    use rstest::rstest;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_short_flags_when_parsing_then_request_is_populated() {
        let cli = Cli::try_parse_from([
            "pfxgen", "-p", "site.key", "-c", "site.pem", "-o", "out.pfx", "-C", "-d",
        ])
        .unwrap();

        assert_eq!(
            cli.request(),
            PfxRequest {
                privkey: Some(PathBuf::from("site.key")),
                cert: Some(PathBuf::from("site.pem")),
                output: Some(PathBuf::from("out.pfx")),
                clobber: true,
                dry_run: true,
            }
        );
    }

    #[test]
    fn given_long_flags_with_padding_when_parsing_then_paths_are_trimmed() {
        let cli = Cli::try_parse_from([
            "pfxgen",
            "--privkey",
            " site.key ",
            "--cert=site.pem\t",
            "--clobber",
            "--dryrun",
        ])
        .unwrap();

        let request = cli.request();
        assert_eq!(request.privkey, Some(PathBuf::from("site.key")));
        assert_eq!(request.cert, Some(PathBuf::from("site.pem")));
        assert_eq!(request.output, None);
        assert!(request.clobber && request.dry_run);
    }

    #[test]
    fn given_no_flags_when_parsing_then_defaults_apply() {
        let cli = Cli::try_parse_from(["pfxgen"]).unwrap();

        assert_eq!(cli.request(), PfxRequest::default());
        assert_eq!(cli.verbose, 0);
    }

    #[cfg(unix)]
    #[test]
    fn given_non_utf8_paths_when_parsing_then_bytes_are_kept() {
        use std::os::unix::ffi::OsStringExt;
        let cert = OsString::from_vec(b" /certs/caf\xff.pem\t".to_vec());
        let output = OsString::from_vec(b"/out/caf\xff.pfx".to_vec());

        let cli = Cli::try_parse_from([
            OsString::from("pfxgen"),
            OsString::from("-c"),
            cert,
            OsString::from("-o"),
            output,
        ])
        .unwrap();

        let request = cli.request();
        assert_eq!(
            request.cert,
            Some(PathBuf::from(OsString::from_vec(b"/certs/caf\xff.pem".to_vec())))
        );
        assert_eq!(
            request.output,
            Some(PathBuf::from(OsString::from_vec(b"/out/caf\xff.pfx".to_vec())))
        );
    }

    #[rstest]
    #[case("   ", "")]
    #[case("\tsite.pem\n", "site.pem")]
    #[case("my cert.pem", "my cert.pem")]
    fn given_padded_value_when_trimming_then_inner_spaces_survive(
        #[case] raw: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(trimmed_path(OsString::from(raw)), PathBuf::from(expected));
    }

    #[rstest]
    #[case("-h")]
    #[case("-?")]
    #[case("--help")]
    fn given_help_flag_when_parsing_then_display_help(#[case] flag: &str) {
        let err = Cli::try_parse_from(["pfxgen", "--privkey", "/does/not/exist", flag]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[rstest]
    #[case(&["pfxgen", "--bogus"])]
    #[case(&["pfxgen", "-x"])]
    #[case(&["pfxgen", "--privkey"])]
    #[case(&["pfxgen", "stray"])]
    fn given_malformed_arguments_when_parsing_then_error(#[case] args: &[&str]) {
        let err = Cli::try_parse_from(args).unwrap_err();

        assert_ne!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 2);
    }
}
