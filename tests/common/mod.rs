#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use url_mapper::prelude::*;

/// Counts how many times the mapper signalled a change.
#[derive(Clone, Default)]
pub struct ChangeCounter(Arc<AtomicUsize>);

impl ChangeCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    pub fn notifier(&self) -> Arc<FnNotifier> {
        let calls = self.0.clone();
        Arc::new(FnNotifier::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
        }))
    }
}

pub struct TestMapper {
    pub mapper: UrlMapper<InMemoryMappingRepository>,
    pub repository: Arc<InMemoryMappingRepository>,
    pub changes: ChangeCounter,
}

pub async fn create_test_mapper() -> TestMapper {
    create_test_mapper_with(Vec::new(), MapperOptions::default()).await
}

pub async fn create_test_mapper_with(
    records: Vec<UrlMapping>,
    options: MapperOptions,
) -> TestMapper {
    let repository = Arc::new(InMemoryMappingRepository::with_records(records));
    let changes = ChangeCounter::default();

    let mapper = UrlMapper::load_with_options(repository.clone(), changes.notifier(), options)
        .await
        .unwrap();

    TestMapper {
        mapper,
        repository,
        changes,
    }
}
