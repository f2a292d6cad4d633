use anyhow::Result;
use passgen_password::{PasswordBuilder, UniformSource, SYMBOLS};
use passgen_test_utils::mock;
use secrecy::ExposeSecret;

#[test]
fn passgen_alphanumeric() -> Result<()> {
    let generator = PasswordBuilder::new_alpha_numeric(12);
    let result = generator.one()?;
    assert_eq!(generator.len(), result.password.expose_secret().len());
    Ok(())
}

#[test]
fn passgen_printable_long() -> Result<()> {
    let generator = PasswordBuilder::new_printable(32);
    let result = generator.one()?;
    assert_eq!(generator.len(), result.password.expose_secret().len());
    assert!(result.measured_bits() > 0.0);
    Ok(())
}

#[test]
fn passgen_symbols_only() -> Result<()> {
    let generator = PasswordBuilder::new(16).symbols();
    assert_eq!(SYMBOLS.len(), generator.pool_size());

    let mut source = UniformSource::new(mock::seeded(9));
    let result = generator.one_with(&mut source)?;
    assert!(result
        .password
        .expose_secret()
        .chars()
        .all(|c| SYMBOLS.contains(&c)));
    let expected = 16.0 * (SYMBOLS.len() as f64).log2();
    assert!((result.bits - expected).abs() < 1e-9);
    Ok(())
}

#[test]
fn passgen_many() -> Result<()> {
    let results = PasswordBuilder::new_alpha_numeric(8).many(5)?;
    assert_eq!(5, results.len());
    Ok(())
}

#[test]
fn passgen_invalid() {
    assert!(PasswordBuilder::new(0).lower().one().is_err());
    assert!(PasswordBuilder::new(8).one().is_err());
}
