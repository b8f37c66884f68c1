//! Concurrent resolution tests

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::thread;

use injector_domain::Rule;
use injector_infrastructure::Injector;

use crate::test_utils::*;

const THREADS: usize = 8;
const ROUNDS: usize = 200;

#[test]
fn test_concurrent_transient_resolution() {
    let injector = Injector::new();
    let counter = Arc::new(AtomicUsize::new(0));
    injector.add(counted_rule("shared", false, counter.clone())).unwrap();

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                for _ in 0..ROUNDS {
                    let resolved: Arc<dyn Service> = injector.inject().unwrap();
                    assert_eq!(resolved.label(), "shared");
                }
            });
        }
    });

    assert_eq!(calls(&counter), THREADS * ROUNDS);
}

#[test]
fn test_concurrent_singleton_settles_on_one_instance() {
    let injector = Injector::new();
    let counter = Arc::new(AtomicUsize::new(0));
    injector.add(counted_rule("single", true, counter.clone())).unwrap();

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                for _ in 0..ROUNDS {
                    let resolved: Arc<dyn Service> = injector.inject().unwrap();
                    assert_eq!(resolved.label(), "single");
                }
            });
        }
    });

    // Racing first resolutions may each run the factory, later ones hit the cache
    assert!(calls(&counter) >= 1);
    assert!(calls(&counter) <= THREADS);

    let first: Arc<dyn Service> = injector.inject().unwrap();
    let second: Arc<dyn Service> = injector.inject().unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_resolution_during_reconfiguration() {
    let injector = Injector::new();
    injector.add(Rule::new::<dyn Service, _>(|| Ok(service("stable")))).unwrap();

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                for _ in 0..ROUNDS {
                    // Each configure swaps the whole rule set atomically
                    let resolved: Arc<dyn Service> = injector.inject().unwrap();
                    assert_eq!(resolved.label(), "stable");
                }
            });
        }
        scope.spawn(|| {
            for _ in 0..ROUNDS {
                injector
                    .configure([Rule::new::<dyn Service, _>(|| Ok(service("stable")))])
                    .unwrap();
            }
        });
    });
}
