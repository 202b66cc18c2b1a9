//! Error paths: nothing is encrypted and every opened session is released

use mchybrid_api::{ConfigurationErrorKind, DecapsulationStyle, Error};
use mchybrid_hybrid::{HybridPipeline, PipelineConfig};
use mchybrid_symmetric::Aes128Cbc;
use mchybrid_tests::{logging, CountingCipher, ScriptedProvider};

#[test]
fn test_forced_mismatch_produces_no_ciphertext() {
    logging::init();
    for style in [DecapsulationStyle::Retained, DecapsulationStyle::ExplicitKey] {
        let provider = ScriptedProvider::mceliece()
            .with_decapsulation_style(style)
            .with_forced_mismatch();
        let counters = provider.counters();
        let cipher = CountingCipher::new(Aes128Cbc::new(), counters.clone());
        let pipeline = HybridPipeline::new(provider, cipher);

        let err = pipeline.run(b"Hello").unwrap_err();
        assert!(err.is_secret_mismatch(), "{:?}", err);
        assert_eq!(
            err,
            Error::SecretMismatch {
                parameter_set: "Classic-McEliece-348864".into()
            }
        );
        assert_eq!(counters.decapsulations(), 1);
        assert_eq!(counters.encryptions(), 0);
        assert_eq!(counters.decryptions(), 0);
        assert_eq!(counters.opens(), 1);
        assert_eq!(counters.closes(), 1);
    }
}

#[test]
fn test_unknown_name_rejected_before_any_session() {
    let provider = ScriptedProvider::mceliece();
    let counters = provider.counters();
    let config = PipelineConfig::new().with_parameter_set("Classic-McEliece-999999");
    let pipeline = HybridPipeline::with_config(provider, Aes128Cbc::new(), config);

    let err = pipeline.run(b"Hello").unwrap_err();
    assert_eq!(
        err.configuration_kind(),
        Some(ConfigurationErrorKind::UnknownParameterSet)
    );
    assert_eq!(counters.opens(), 0);
    assert_eq!(counters.closes(), 0);
}

#[test]
fn test_liboqs_underscore_spelling_is_not_accepted() {
    let config = PipelineConfig::new().with_parameter_set("Classic_McEliece_348864");
    let pipeline =
        HybridPipeline::with_config(ScriptedProvider::mceliece(), Aes128Cbc::new(), config);
    assert!(pipeline.run(b"Hello").unwrap_err().is_configuration());
}

#[test]
fn test_empty_mechanism_set_is_distinct() {
    let provider = ScriptedProvider::new(Vec::<String>::new());
    let counters = provider.counters();
    let pipeline = HybridPipeline::new(provider, Aes128Cbc::new());

    let err = pipeline.run(b"Hello").unwrap_err();
    assert_eq!(
        err.configuration_kind(),
        Some(ConfigurationErrorKind::NoMechanisms)
    );
    assert_eq!(counters.opens(), 0);
}

#[test]
fn test_version_skew_surfaces_unsupported_parameter() {
    let provider = ScriptedProvider::mceliece().with_open_failure(Error::UnsupportedParameter {
        name: "Classic-McEliece-348864".into(),
    });
    let pipeline = HybridPipeline::new(provider, Aes128Cbc::new());
    assert!(pipeline.run(b"Hello").unwrap_err().is_unsupported_parameter());
}

#[test]
fn test_native_open_failure_is_capability_unavailable() {
    let provider = ScriptedProvider::mceliece()
        .with_open_failure(Error::kem("native init", "library not loaded"));
    let pipeline = HybridPipeline::new(provider, Aes128Cbc::new());
    assert_eq!(
        pipeline.run(b"Hello").unwrap_err().configuration_kind(),
        Some(ConfigurationErrorKind::CapabilityUnavailable)
    );
}

#[test]
fn test_disabled_default_falls_back_via_select_default() {
    let provider = ScriptedProvider::new(["Kyber512", "Classic-McEliece-460896f"]);
    let pipeline = HybridPipeline::new(provider, Aes128Cbc::new());

    // The configured default is not enabled here
    assert!(pipeline.select().unwrap_err().is_configuration());
    let chosen = pipeline.selector().select_default().unwrap();
    assert_eq!(chosen.name(), "Classic-McEliece-460896f");
}
