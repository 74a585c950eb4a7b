//! Input preparation for the construction engine.
//!
//! The engine requires the sentinel value 0 at both ends of the text
//! and nowhere inside it. The functions here copy raw input into a
//! padded buffer, remap interior zeros out of the way, and write the
//! sentinels, returning the alphabet size alongside the prepared text.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Prepare a byte string: pad with the two sentinel slots, standardize
/// interior zeros, and return `(text, sigma)`.
pub fn prepare_bytes(data: &[u8]) -> (Vec<u8>, u32) {
    let mut text = vec![0; data.len() + 2];
    text[1..data.len() + 1].copy_from_slice(data);
    let sigma = standardize_bytes(&mut text);
    (text, sigma)
}

/// Remap interior zeros of a padded byte buffer.
///
/// If 0 occurs inside and the alphabet has a free symbol `c`, every
/// symbol below `c` is incremented, which keeps all suffix comparisons
/// intact. With all 256 symbols in use the zeros are replaced by ones
/// instead, which may merge suffixes and is reflected in the returned
/// alphabet size.
fn standardize_bytes(text: &mut [u8]) -> u32 {
    let n = text.len();
    let mut occurs = [false; 256];
    for &c in &text[1..n - 1] {
        occurs[c as usize] = true;
    }
    let mut sigma = occurs.iter().filter(|&&b| b).count() as u32;

    if occurs[0] {
        if let Some(free) = occurs.iter().position(|&b| !b) {
            let free = free as u8;
            for c in text[1..n - 1].iter_mut() {
                if *c < free {
                    *c += 1;
                }
            }
        } else {
            // all 256 symbols occur, so the zeros can only merge into
            // the ones
            for c in text[1..n - 1].iter_mut() {
                if *c == 0 {
                    *c = 1;
                }
            }
            sigma = 255;
        }
    }

    text[0] = 0;
    text[n - 1] = 0;
    sigma
}

/// Prepare a 32-bit symbol string, same contract as [`prepare_bytes`].
pub fn prepare_ints(data: &[u32]) -> (Vec<u32>, u32) {
    let mut text = vec![0; data.len() + 2];
    text[1..data.len() + 1].copy_from_slice(data);
    let sigma = standardize_ints(&mut text);
    (text, sigma)
}

fn standardize_ints(text: &mut [u32]) -> u32 {
    let n = text.len();
    let mut symbols: Vec<u32> = text[1..n - 1].to_vec();
    symbols.sort_unstable();
    symbols.dedup();
    let mut sigma = symbols.len() as u32;

    if symbols.first() == Some(&0) {
        if sigma == u32::MAX {
            for c in text[1..n - 1].iter_mut() {
                if *c == 0 {
                    *c = 1;
                }
            }
            sigma -= 1;
        } else {
            // smallest value absent from the (sorted, deduplicated)
            // alphabet: the first gap, or one past the maximum
            let mut free = symbols.len() as u32;
            for (i, &c) in symbols.iter().enumerate() {
                if c != i as u32 {
                    free = i as u32;
                    break;
                }
            }
            for c in text[1..n - 1].iter_mut() {
                if *c < free {
                    *c += 1;
                }
            }
        }
    }

    text[0] = 0;
    text[n - 1] = 0;
    sigma
}

/// Read a file, optionally truncated to its first `prefix` bytes.
pub fn read_file<P: AsRef<Path>>(path: P, prefix: Option<u64>) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut data = Vec::new();
    match prefix {
        Some(limit) => {
            file.take(limit).read_to_end(&mut data)?;
        }
        None => {
            let mut file = file;
            file.read_to_end(&mut data)?;
        }
    }
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_bytes_pass_through() {
        let (text, sigma) = prepare_bytes(b"banana");
        assert_eq!(text, b"\0banana\0");
        assert_eq!(sigma, 3);
    }

    #[test]
    fn interior_zeros_are_shifted_past_a_free_symbol() {
        let (text, sigma) = prepare_bytes(&[0, 2, 0, 5]);
        // 1 is free, so only the zeros move
        assert_eq!(text, [0, 1, 2, 1, 5, 0]);
        assert_eq!(sigma, 3);
        assert!(text[1..5].iter().all(|&c| c != 0));
    }

    #[test]
    fn shifting_preserves_suffix_order() {
        let data = [0u8, 1, 2, 0, 1, 0, 0, 2];
        let (text, _) = prepare_bytes(&data);
        let inner = &text[1..text.len() - 1];
        for i in 0..data.len() {
            for j in 0..data.len() {
                assert_eq!(
                    data[i..].cmp(&data[j..]),
                    inner[i..].cmp(&inner[j..]),
                    "order of suffixes {} and {} changed",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn full_alphabet_falls_back_to_lossy_replacement() {
        let data: Vec<u8> = (0..=255).collect();
        let (text, sigma) = prepare_bytes(&data);
        assert_eq!(sigma, 255);
        assert!(text[1..text.len() - 1].iter().all(|&c| c != 0));
        assert_eq!(text[1], 1);
    }

    #[test]
    fn int_zeros_use_the_first_alphabet_gap() {
        let (text, sigma) = prepare_ints(&[0, 1, 2, 9]);
        // alphabet {0,1,2,9}: 3 is the first gap
        assert_eq!(text, [0, 1, 2, 3, 9, 0]);
        assert_eq!(sigma, 4);
    }

    #[test]
    fn contiguous_int_alphabet_shifts_entirely() {
        let (text, sigma) = prepare_ints(&[0, 1, 2]);
        assert_eq!(text, [0, 1, 2, 3, 0]);
        assert_eq!(sigma, 3);
    }

    #[test]
    fn empty_input_is_only_sentinels() {
        let (text, sigma) = prepare_bytes(b"");
        assert_eq!(text, [0, 0]);
        assert_eq!(sigma, 0);
    }
}
