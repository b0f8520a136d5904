#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BcdError {
    #[error("value out of BCD range: expected 0-99, got {0}")]
    OutOfRange(i32),
}

/// Decodes a packed BCD byte. Control and flag bits must be masked off by the caller.
pub fn bcd_to_int(byte: u8) -> u8 {
    (byte >> 4) * 10 + (byte & 0x0f)
}

pub fn int_to_bcd(value: i32) -> Result<u8, BcdError> {
    if !(0..=99).contains(&value) {
        return Err(BcdError::OutOfRange(value));
    }

    let value = value as u8;
    Ok(((value / 10) << 4) | (value % 10))
}
