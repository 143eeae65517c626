use std::fmt::Display;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub fn validate_range<T>(value: T, min: T, max: T, field_name: &str) -> Result<(), String>
where
    T: PartialOrd + Display,
{
    if value < min || value > max {
        return Err(format!(
            "{} must be between {} and {}, got {}",
            field_name, min, max, value
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_range_accepts_bounds() {
        assert!(validate_range(50, 50, 5000, "cpu_move_delay_ms").is_ok());
        assert!(validate_range(5000, 50, 5000, "cpu_move_delay_ms").is_ok());
    }

    #[test]
    fn test_validate_range_names_field() {
        let err = validate_range(10, 50, 5000, "cpu_move_delay_ms").unwrap_err();
        assert!(err.contains("cpu_move_delay_ms"));
        assert!(err.contains("got 10"));
    }
}
