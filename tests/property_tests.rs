use dialsrv::net::{Candidate, Family, SocketType};
use dialsrv::{DialError, try_candidates};
use proptest::prelude::*;
use std::cell::RefCell;
use std::io::{Error, ErrorKind};

fn candidates(len: usize) -> Vec<Candidate> {
    (0..len)
        .map(|i| Candidate {
            family: Family::V4,
            socket_type: SocketType::Stream,
            addr: format!("127.0.0.1:{}", 1000 + i).parse().unwrap(),
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Property: the first succeeding candidate wins, in sequence order,
    /// and no later candidate is attempted
    #[test]
    fn first_success_wins(len in 1usize..16, pick in 0usize..16) {
        let success = pick % len;
        tokio_test::block_on(async {
            let cands = candidates(len);
            let attempted = RefCell::new(0usize);

            let got = try_candidates(&cands, |c| {
                *attempted.borrow_mut() += 1;
                async move {
                    if c.addr.port() as usize == 1000 + success {
                        Ok(c.addr.port())
                    } else {
                        Err(Error::new(ErrorKind::ConnectionRefused, "refused"))
                    }
                }
            })
            .await
            .map_err(|e| TestCaseError::fail(format!("unexpected failure: {e}")))?;

            prop_assert_eq!(got as usize, 1000 + success);
            prop_assert_eq!(*attempted.borrow(), success + 1);
            Ok(())
        })?;
    }

    /// Property: when every attempt fails, exhaustion reports the full count
    #[test]
    fn exhaustion_counts_attempts(len in 0usize..16) {
        tokio_test::block_on(async {
            let cands = candidates(len);

            let result: dialsrv::Result<()> = try_candidates(&cands, |_| async {
                Err(Error::new(ErrorKind::ConnectionRefused, "refused"))
            })
            .await;

            match result {
                Err(DialError::Exhausted { tried, .. }) => prop_assert_eq!(tried, len),
                _ => prop_assert!(false, "expected exhaustion"),
            }
            Ok(())
        })?;
    }
}
