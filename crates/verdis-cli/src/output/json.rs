use verdis_core::error::VerdisError;

pub fn print<T: serde::Serialize>(value: &T) -> Result<(), VerdisError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
