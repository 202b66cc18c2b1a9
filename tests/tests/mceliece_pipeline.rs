//! Pipeline runs against the native Classic McEliece capability
//!
//! These run on ordinary threads: the capability moves native calls onto
//! its own worker stack.

use mchybrid_api::DecapsulationStyle;
use mchybrid_hybrid::{format_size, HybridPipeline, IvPolicy, PipelineConfig, PipelineState};
use mchybrid_kem::{McElieceProvider, McElieceVariant};
use mchybrid_symmetric::Aes128Cbc;
use mchybrid_tests::logging;

fn run_parameter_set(variant: McElieceVariant) {
    let params = variant.params();
    let config = PipelineConfig::new().with_parameter_set(params.name);
    let pipeline = HybridPipeline::with_config(McElieceProvider::new(), Aes128Cbc::new(), config);
    let report = pipeline.run(b"Hello").expect(params.name);
    assert_eq!(report.parameter_set.name(), params.name);
    assert_eq!(report.public_key_size, params.public_key_size);
    assert_eq!(report.kem_ciphertext.len(), params.ciphertext_size);
    assert_eq!(report.shared_secret_size, params.shared_secret_size);
    assert_eq!(&report.recovered_plaintext.unwrap()[..], b"Hello");
}

#[test]
fn test_hello_with_default_parameter_set() {
    logging::init();
    let config = PipelineConfig::new().with_secret_key_export(true);
    let pipeline = HybridPipeline::with_config(McElieceProvider::new(), Aes128Cbc::new(), config);
    let report = pipeline.run(b"Hello").expect("McEliece pipeline run");

    assert_eq!(report.parameter_set.name(), "Classic-McEliece-348864");
    assert_eq!(report.public_key_size, 261_120);
    assert_eq!(report.secret_key_size, Some(6_492));
    assert_eq!(report.kem_ciphertext.len(), 96);
    assert_eq!(report.shared_secret_size, 32);
    assert_eq!(report.payload.ciphertext.len(), 16);
    assert_eq!(&report.recovered_plaintext.unwrap()[..], b"Hello");
    assert!(report.states.contains(&PipelineState::Decrypted));
    assert_eq!(format_size(report.public_key_size), "255.0 KB");
}

#[test]
fn test_default_run_on_small_worker_thread() {
    let report = std::thread::Builder::new()
        .name("request-worker".into())
        .stack_size(2 * 1024 * 1024)
        .spawn(|| HybridPipeline::new(McElieceProvider::new(), Aes128Cbc::new()).run(b"Hello"))
        .unwrap()
        .join()
        .unwrap()
        .expect("McEliece pipeline run");
    assert_eq!(&report.recovered_plaintext.unwrap()[..], b"Hello");
    assert_eq!(report.states.last(), Some(&PipelineState::Released));
}

#[test]
fn test_explicit_key_backend_through_pipeline() {
    let provider = McElieceProvider::new()
        .with_variants([McElieceVariant::Mceliece348864f])
        .with_decapsulation_style(DecapsulationStyle::ExplicitKey);
    let config = PipelineConfig::new()
        .with_parameter_set("Classic-McEliece-348864f")
        .with_iv_policy(IvPolicy::Zero);
    let pipeline = HybridPipeline::with_config(provider, Aes128Cbc::new(), config);

    let report = pipeline.run(b"Hola mundo").expect("McEliece pipeline run");
    assert_eq!(&report.recovered_plaintext.unwrap()[..], b"Hola mundo");
}

#[test]
fn test_level3_parameter_set() {
    run_parameter_set(McElieceVariant::Mceliece460896f);
}

#[test]
fn test_level5_parameter_sets() {
    run_parameter_set(McElieceVariant::Mceliece6688128f);
    run_parameter_set(McElieceVariant::Mceliece8192128f);
}

#[test]
fn test_disabled_variant_rejected_before_open() {
    let provider = McElieceProvider::new().with_variants([McElieceVariant::Mceliece460896]);
    let pipeline = HybridPipeline::new(provider, Aes128Cbc::new());
    let err = pipeline.run(b"Hello").unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(
        pipeline.selector().select_default().unwrap().name(),
        "Classic-McEliece-460896"
    );
}

/// Slow: generates a keypair for every parameter set
#[test]
#[ignore]
fn test_every_parameter_set() {
    for variant in McElieceVariant::ALL {
        run_parameter_set(variant);
    }
}
