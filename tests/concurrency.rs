// SPDX-License-Identifier: MIT OR Apache-2.0

use std::thread;
use tpm2_constants::{Algorithm, AlgorithmAttribute, Capability, Constant, ObjectAttribute};

fn exercise<T: Constant + core::fmt::Display>() {
    for &(value, name) in T::TABLE {
        assert_eq!(value.to_string(), name);
        let encoded = tpm2_constants::codec::to_json(value).unwrap();
        assert_eq!(tpm2_constants::codec::from_json::<T>(&encoded).unwrap(), value);
    }
    assert_eq!(T::from_raw(99999999).to_string(), T::UNKNOWN);
    assert!(tpm2_constants::codec::from_json::<T>(b"false").is_err());
}

#[test]
fn many_threads_share_the_tables() {
    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    exercise::<Algorithm>();
                    exercise::<AlgorithmAttribute>();
                    exercise::<Capability>();
                    exercise::<ObjectAttribute>();
                }
            });
        }
    });
}
