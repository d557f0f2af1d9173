//! CSV rendering utilities.

use serde::Serialize;
use std::io::Write;

/// Writes an iterator of records to a CSV writer, header first.
/// Each record must implement Serialize.
pub fn write_csv<T, W>(writer: W, records: impl Iterator<Item = T>) -> csv::Result<()>
where
    T: Serialize,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{Account, AccountRow};

    #[test]
    fn test_write_account_rows() -> csv::Result<()> {
        let accounts = [
            Account::new("work", "u1", Some("p1".to_string()), "email"),
            Account::new("home, shared", "u2", None, "vpn"),
        ];
        let mut output = Vec::new();
        write_csv(
            &mut output,
            accounts.iter().enumerate().map(|(i, a)| AccountRow::new(i, a)),
        )?;

        let expected = "index,label,login,type,password
0,work,u1,email,set
1,\"home, shared\",u2,vpn,
";
        assert_eq!(String::from_utf8(output).unwrap(), expected);
        Ok(())
    }

    #[test]
    fn test_write_nothing_writes_nothing() -> csv::Result<()> {
        let mut output = Vec::new();
        write_csv(&mut output, std::iter::empty::<AccountRow>())?;
        assert!(output.is_empty());
        Ok(())
    }
}
