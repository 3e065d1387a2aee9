//! Randomized checks over the public engine surface.

use cardcheck_core::{
    check_digit, classify, generate_with, is_valid, mask, sanitize, sum, CanonicalDigits,
    CardType, GenerationRequest, MAX_LENGTH,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 500;

fn random_digits(rng: &mut StdRng, len: usize) -> CanonicalDigits {
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

fn random_raw(rng: &mut StdRng) -> String {
    const ALPHABET: &[char] = &['0', '5', '9', ' ', '-', 'a', '•', '\u{0663}', '\t', 'Z'];
    let len = rng.random_range(0..32);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

#[test]
fn check_digit_always_completes_body() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..ROUNDS {
        let len = rng.random_range(1..=24);
        let body = random_digits(&mut rng, len);
        let check = char::from(b'0' + check_digit(&body));
        let full: CanonicalDigits = body.as_str().chars().chain([check]).collect();
        assert!(is_valid(&full), "body {body} check {check}");
    }
}

#[test]
fn generator_is_sound_for_every_length() {
    let mut rng = StdRng::seed_from_u64(0xcafe);
    for length in 0..=MAX_LENGTH + 3 {
        for _ in 0..20 {
            let prefix_len = rng.random_range(0..=22);
            let prefix = random_digits(&mut rng, prefix_len);
            let request = GenerationRequest::new(length, prefix.as_str());
            let number = generate_with(&mut rng, &request);

            assert!(is_valid(&number), "{number} from {request:?}");
            assert_eq!(number.len(), length.clamp(1, MAX_LENGTH));
            let expected_len = number.len();
            if prefix.len() <= expected_len - 1 {
                assert!(number.starts_with(prefix.as_str()), "{number} lost {prefix}");
            }
        }
    }
}

#[test]
fn sanitize_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..ROUNDS {
        let raw = random_raw(&mut rng);
        let once = sanitize(&raw);
        assert_eq!(sanitize(once.as_str()), once);
        assert!(once.as_str().bytes().all(|b| b.is_ascii_digit()));
    }
}

#[test]
fn validity_agrees_with_sum() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..ROUNDS {
        let len = rng.random_range(1..=19);
        let digits = random_digits(&mut rng, len);
        assert_eq!(is_valid(&digits), sum(&digits) % 10 == 0);
    }
}

#[test]
fn mask_reveals_exactly_the_last_four() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..ROUNDS {
        let len = rng.random_range(0..=19);
        let digits = random_digits(&mut rng, len);
        let masked = mask(&digits);
        let shown: String = masked.chars().filter(|c| *c != ' ').collect();

        if len <= 4 {
            assert_eq!(masked, digits.as_str());
            continue;
        }
        assert_eq!(shown.chars().count(), len);
        let (hidden, visible): (Vec<char>, Vec<char>) = {
            let chars: Vec<char> = shown.chars().collect();
            (chars[..len - 4].to_vec(), chars[len - 4..].to_vec())
        };
        assert!(hidden.iter().all(|c| *c == '•'));
        assert_eq!(
            visible.into_iter().collect::<String>(),
            &digits.as_str()[len - 4..]
        );
    }
}

#[test]
fn empty_input_is_total() {
    let empty = sanitize("no digits here");
    assert!(!is_valid(&empty));
    assert_eq!(classify(&empty), CardType::Unknown);
    assert_eq!(mask(&empty), "");
    assert_eq!(cardcheck_core::group(&empty), "");
    assert!(cardcheck_core::explain(&empty).is_none());
}
