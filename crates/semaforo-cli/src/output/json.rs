use semaforo_core::error::SemaforoError;

pub fn print<T: serde::Serialize>(value: &T) -> Result<(), SemaforoError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
