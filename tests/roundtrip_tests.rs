// tests/roundtrip_tests.rs

use huffman_codec::{
    CodecConfig, FrequencyTable, HuffmanCodec, HuffmanError, MinPriorityQueue, PackWidth,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded random bytes; `alphabet` limits the symbol range to get skewed
/// and sparse distributions as well as dense ones.
fn sample(seed: u64, len: usize, alphabet: u16) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let alphabet = u64::from(alphabet);
    (0..len)
        .map(|_| {
            // Squaring skews the distribution toward small symbols.
            let r = rng.gen_range(0..alphabet);
            ((r * r) / (alphabet - 1).max(1)) as u8
        })
        .collect()
}

fn inputs() -> Vec<Vec<u8>> {
    let mut inputs = vec![
        b"AAABBC".to_vec(),
        b"aaaa".to_vec(),
        b"ab".to_vec(),
        b"x".to_vec(),
        b"The quick brown fox jumps over the lazy dog.\n".to_vec(),
        (0..=255).collect(),
        vec![0u8; 1000],
    ];
    for (seed, alphabet) in [(1, 2), (2, 5), (3, 26), (4, 100), (5, 256)] {
        inputs.push(sample(seed, 777, alphabet));
    }
    inputs
}

/// Cost of an optimal prefix code, computed by merging a sorted list.
fn optimal_cost(frequencies: &FrequencyTable) -> u64 {
    let mut weights: Vec<u64> = frequencies.iter_present().map(|(_, c)| c).collect();
    let mut cost = 0;
    while weights.len() > 1 {
        weights.sort_unstable_by(|a, b| b.cmp(a));
        let a = weights.pop().unwrap();
        let b = weights.pop().unwrap();
        cost += a + b;
        weights.push(a + b);
    }
    cost
}

#[test]
fn test_textual_roundtrip() {
    for input in inputs() {
        let codec = HuffmanCodec::new(&input).unwrap();
        let encoded = codec.encode(&input).unwrap();
        assert!(encoded.iter().all(|&b| b == b'0' || b == b'1'));
        assert_eq!(codec.decode(&encoded).unwrap(), input);
    }
}

#[test]
fn test_packed_roundtrip_both_widths() {
    for input in inputs() {
        for width in [PackWidth::Seven, PackWidth::Eight] {
            let config = CodecConfig::new().with_pack_width(width);
            let codec = HuffmanCodec::with_config(&input, config).unwrap();
            let packed = codec.compress(&input).unwrap();

            assert_eq!(packed.bytes.len() as u64, width.bytes_for(packed.bit_count));
            if width == PackWidth::Seven {
                assert!(packed.bytes.iter().all(|b| b & 0x80 == 0));
            }
            assert_eq!(codec.decompress(&packed.bytes, packed.bit_count).unwrap(), input);
        }
    }
}

#[test]
fn test_code_is_prefix_free() {
    for input in inputs() {
        let codec = HuffmanCodec::new(&input).unwrap();
        let words: Vec<_> = codec.book().table().iter().collect();
        for (i, (_, a)) in words.iter().enumerate() {
            for (_, b) in words.iter().skip(i + 1) {
                assert!(!a.is_prefix_of(b) && !b.is_prefix_of(a), "{} vs {}", a, b);
            }
        }
    }
}

#[test]
fn test_weighted_length_is_optimal() {
    for input in inputs() {
        let codec = HuffmanCodec::new(&input).unwrap();
        let frequencies = codec.book().frequencies();
        if frequencies.distinct_symbols() < 2 {
            continue;
        }
        assert_eq!(codec.book().encoded_bits(), optimal_cost(frequencies));
        assert_eq!(codec.encode(&input).unwrap().len() as u64, optimal_cost(frequencies));
    }
}

#[test]
fn test_single_symbol_input() {
    let codec = HuffmanCodec::new(b"aaaa").unwrap();
    assert_eq!(codec.book().table().get(b'a').len(), 1);
    let encoded = codec.encode(b"aaaa").unwrap();
    assert_eq!(encoded, b"0000");
    assert_eq!(codec.decode(&encoded).unwrap(), b"aaaa");

    let packed = codec.compress(b"aaaa").unwrap();
    assert_eq!(packed.bit_count, 4);
    assert_eq!(codec.decompress(&packed.bytes, 4).unwrap(), b"aaaa");
}

#[test]
fn test_aaabbc_scenario() {
    let codec = HuffmanCodec::new(b"AAABBC").unwrap();
    let table = codec.book().table();
    assert_eq!(table.get(b'A').len(), 1);
    assert_eq!(table.get(b'B').len(), 2);
    assert_eq!(table.get(b'C').len(), 2);

    let encoded = codec.encode(b"AAABBC").unwrap();
    assert_eq!(encoded.len(), 3 + 2 * 2 + 2);
    assert_eq!(codec.decode(&encoded).unwrap(), b"AAABBC");
}

#[test]
fn test_truncated_streams_are_detected() {
    let input = b"The quick brown fox jumps over the lazy dog.";
    let codec = HuffmanCodec::new(input).unwrap();

    let encoded = codec.encode(input).unwrap();
    assert!(matches!(
        codec.decode(&encoded[..encoded.len() - 1]),
        Err(HuffmanError::StreamCorruption(_))
    ));

    // The last symbol '.' occurs once, so its code word is longer than one digit.
    let packed = codec.compress(input).unwrap();
    assert!(matches!(
        codec.decompress(&packed.bytes, packed.bit_count - 1),
        Err(HuffmanError::StreamCorruption(_))
    ));
}

#[test]
fn test_codec_books_are_independent() {
    let first = HuffmanCodec::new(b"aaaaaaab").unwrap();
    let second = HuffmanCodec::new(b"abbbbbbb").unwrap();

    let a = first.encode(b"ab").unwrap();
    let b = second.encode(b"ab").unwrap();
    assert_eq!(first.decode(&a).unwrap(), b"ab");
    assert_eq!(second.decode(&b).unwrap(), b"ab");
    assert!(matches!(first.encode(b"c"), Err(HuffmanError::UnknownSymbol(b'c'))));
}

#[test]
fn test_queue_drains_in_order() {
    let input = sample(9, 300, 256);
    let mut queue: MinPriorityQueue<u8> = input.iter().copied().collect();
    let mut drained = Vec::with_capacity(input.len());
    while let Ok(value) = queue.extract_min() {
        drained.push(value);
    }
    let mut sorted = input.clone();
    sorted.sort_unstable();
    assert_eq!(drained, sorted);
}
