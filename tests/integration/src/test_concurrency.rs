//! Sharing built structures across threads.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use s3crt_model::Structure;
    use s3crt_model::enums::ObjectStorageClass;
    use s3crt_model::output::ListObjectsV2Output;
    use s3crt_model::types::Object;

    fn listing(count: i32) -> ListObjectsV2Output {
        let contents: Vec<Object> = (0..count)
            .map(|i| {
                Object::builder()
                    .key(format!("logs/{i:04}.gz"))
                    .size(i * 10)
                    .storage_class(ObjectStorageClass::Standard)
                    .build()
            })
            .collect();
        ListObjectsV2Output::builder()
            .name("logs")
            .key_count(count)
            .contents(contents)
            .build()
    }

    #[test]
    fn test_should_read_shared_structure_from_many_threads() {
        let shared = Arc::new(listing(64));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let listing = Arc::clone(&shared);
                thread::spawn(move || {
                    let contents = listing.contents().unwrap_or_default();
                    let total: i32 = contents.iter().filter_map(Object::size).sum();
                    (listing.key_count(), contents.len(), total)
                })
            })
            .collect();

        let expected_total: i32 = (0..64).map(|i| i * 10).sum();
        for handle in handles {
            let (key_count, len, total) = handle.join().expect("reader thread panicked");
            assert_eq!(key_count, Some(64));
            assert_eq!(len, 64);
            assert_eq!(total, expected_total);
        }
    }

    #[test]
    fn test_should_derive_independent_values_per_thread() {
        let shared = Arc::new(listing(4));

        let handles: Vec<_> = (0..4)
            .map(|n| {
                let base = Arc::clone(&shared);
                thread::spawn(move || {
                    base.with_changes(|b| {
                        b.name(format!("logs-{n}"));
                    })
                })
            })
            .collect();

        let mut names: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().expect("writer thread panicked").name().to_owned())
            .collect();
        names.sort();
        assert_eq!(names, ["logs-0", "logs-1", "logs-2", "logs-3"]);
        assert_eq!(shared.name(), "logs");
        assert_eq!(shared.contents().map(<[Object]>::len), Some(4));
    }

    #[test]
    fn test_should_move_builders_between_threads() {
        let mut builder = listing(2).to_builder();
        builder.prefix("logs/");

        let built = thread::spawn(move || builder.build())
            .join()
            .expect("builder thread panicked");
        assert_eq!(built.prefix(), "logs/");
        assert_eq!(built.key_count(), Some(2));
    }
}
