//! Ask for a length, print one password.

use std::io::{BufRead, Write};

use anyhow::Context;
use rand::{CryptoRng, Rng};

use crate::ProgError;

pub(crate) fn prompt_password<R>(
    sampler: &mut passgen::PasswordSampler<R>,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<(), ProgError>
where
    R: Rng + CryptoRng,
{
    write!(output, "Password length: ")
        .and_then(|()| output.flush())
        .context("failed to write the prompt")?;

    let mut answer = String::new();
    let read = input
        .read_line(&mut answer)
        .context("failed to read the password length")?;
    if read == 0 {
        return Err(ProgError::NoInput);
    }
    let answer = answer.trim();
    let requested = answer
        .parse::<i64>()
        .map_err(|_| ProgError::InvalidLength(answer.to_owned()))?;
    // Zero and negative lengths both give an empty password.
    let length = usize::try_from(requested.max(0))
        .map_err(|_| ProgError::InvalidLength(answer.to_owned()))?;
    log::debug!("generating a password of length {}", length);

    let password = sampler.generate(length);
    writeln!(output, "Your password: {}", password.as_str())
        .context("failed to write the password")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    use super::*;

    fn run(input: &str) -> (Result<(), ProgError>, String) {
        let mut sampler = passgen::PasswordSampler::new(StdRng::seed_from_u64(5));
        let mut output = Vec::new();
        let result = prompt_password(&mut sampler, Cursor::new(input), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[rstest]
    #[case::default(12, "12\n")]
    #[case::surrounding_whitespace(8, "  8  \r\n")]
    #[case::no_newline(30, "30")]
    fn prints_password_of_requested_length(#[case] length: usize, #[case] input: &str) {
        let (result, output) = run(input);

        result.unwrap();
        let password = output
            .strip_prefix("Password length: Your password: ")
            .and_then(|rest| rest.strip_suffix('\n'))
            .unwrap();
        assert_eq!(password.chars().count(), length);
        let alphabet = passgen::Alphabet::standard();
        assert!(password.chars().all(|ch| alphabet.contains(ch)));
    }

    #[rstest]
    #[case::zero("0\n")]
    #[case::negative("-3\n")]
    #[case::very_negative("-9223372036854775808\n")]
    fn non_positive_prints_empty_password(#[case] input: &str) {
        let (result, output) = run(input);

        result.unwrap();
        assert_eq!(output, "Password length: Your password: \n");
    }

    #[rstest]
    #[case::word("abc\n", "abc")]
    #[case::too_big_for_i64("99999999999999999999\n", "99999999999999999999")]
    #[case::fraction("1.5\n", "1.5")]
    #[case::blank("\n", "")]
    fn rejects_non_integer_lengths(#[case] input: &str, #[case] expected: &str) {
        let (result, output) = run(input);

        match result {
            Err(ProgError::InvalidLength(answer)) => assert_eq!(answer, expected),
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(output, "Password length: ");
    }

    #[test]
    fn closed_stdin_is_an_error() {
        let (result, _) = run("");

        assert!(matches!(result, Err(ProgError::NoInput)));
    }
}
