//! Sequential execution of a [`Plan`].

use crate::error::CapsuleResult;
use crate::plan::Plan;
use crate::task::Fetcher;

/// Destination of archived payloads, written one entry at a time.
pub trait ArchiveSink {
    fn write(&mut self, path: &str, payload: &[u8]) -> CapsuleResult<()>;
}

/// Totals reported after a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotStats {
    pub entries: usize,
    pub bytes: usize,
}

/// Run every task of `plan` in order and write its payload to `sink`.
///
/// Stops at the first failing fetch or write. Entries written before the
/// failure stay in the sink.
pub async fn execute<F, S>(plan: &Plan, fetcher: &F, sink: &mut S) -> CapsuleResult<SnapshotStats>
where
    F: Fetcher,
    S: ArchiveSink,
{
    let mut stats = SnapshotStats::default();

    for entry in plan {
        log::info!("Archiving to root: '{}'", entry.path);

        let payload = entry.task.run(fetcher).await.inspect_err(|e| {
            log::error!("Fetching {} for '{}' failed: {}", entry.task.kind(), entry.path, e);
        })?;

        sink.write(&entry.path, &payload)?;

        log::debug!("Wrote {} bytes to '{}'", payload.len(), entry.path);
        stats.entries += 1;
        stats.bytes += payload.len();
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CapsuleError, TransferError};
    use crate::model::Hierarchy;
    use crate::timestamp::SnapshotTime;
    use std::cell::RefCell;

    /// Fails the n-th fetch (1-based), serves the calendar/user name otherwise.
    struct ScriptedFetcher {
        fail_on: Option<usize>,
        calls: RefCell<usize>,
    }

    impl ScriptedFetcher {
        fn new(fail_on: Option<usize>) -> Self {
            ScriptedFetcher {
                fail_on,
                calls: RefCell::new(0),
            }
        }

        fn answer(&self, host: &str, body: &str) -> Result<Vec<u8>, TransferError> {
            let mut calls = self.calls.borrow_mut();
            *calls += 1;
            if self.fail_on == Some(*calls) {
                return Err(TransferError::Status {
                    url: format!("https://{}/", host),
                    status: 500,
                });
            }
            Ok(body.as_bytes().to_vec())
        }
    }

    impl Fetcher for ScriptedFetcher {
        async fn fetch_calendar(
            &self,
            host: &str,
            _user: &str,
            _password: &str,
            calendar: &str,
        ) -> Result<Vec<u8>, TransferError> {
            self.answer(host, &format!("BEGIN:VCALENDAR {}", calendar))
        }

        async fn fetch_contacts(
            &self,
            host: &str,
            user: &str,
            _password: &str,
        ) -> Result<Vec<u8>, TransferError> {
            self.answer(host, &format!("BEGIN:VCARD {}", user))
        }
    }

    #[derive(Default)]
    struct MemorySink {
        written: Vec<(String, Vec<u8>)>,
    }

    impl ArchiveSink for MemorySink {
        fn write(&mut self, path: &str, payload: &[u8]) -> CapsuleResult<()> {
            self.written.push((path.to_string(), payload.to_vec()));
            Ok(())
        }
    }

    fn plan() -> Plan {
        let config: toml::Table = toml::from_str(
            r#"
            ["nc.example.com".alice]
            password = "p"
            calendar_names = ["work", "home"]
            "#,
        )
        .unwrap();
        let hierarchy = Hierarchy::from_config(&config, SnapshotTime::now()).unwrap();
        Plan::build(&hierarchy).unwrap()
    }

    #[tokio::test]
    async fn test_writes_every_entry_in_plan_order() {
        let plan = plan();
        let fetcher = ScriptedFetcher::new(None);
        let mut sink = MemorySink::default();

        let stats = execute(&plan, &fetcher, &mut sink).await.unwrap();

        let paths: Vec<_> = sink.written.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, plan.paths().collect::<Vec<_>>());
        assert_eq!(sink.written[1].1, b"BEGIN:VCALENDAR home".to_vec());
        assert_eq!(sink.written[2].1, b"BEGIN:VCARD alice".to_vec());
        assert_eq!(stats.entries, 3);
        assert_eq!(
            stats.bytes,
            sink.written.iter().map(|(_, b)| b.len()).sum::<usize>()
        );
    }

    #[tokio::test]
    async fn test_stops_after_first_failure() {
        let plan = plan();
        let fetcher = ScriptedFetcher::new(Some(2));
        let mut sink = MemorySink::default();

        let err = execute(&plan, &fetcher, &mut sink).await.unwrap_err();

        assert!(matches!(
            err,
            CapsuleError::Transfer(TransferError::Status { status: 500, .. })
        ));
        // The third task was never run, the first entry is kept.
        assert_eq!(*fetcher.calls.borrow(), 2);
        assert_eq!(sink.written.len(), 1);
        assert_eq!(sink.written[0].0, plan.entries()[0].path);
    }

    #[tokio::test]
    async fn test_sink_failure_aborts() {
        struct BrokenSink;

        impl ArchiveSink for BrokenSink {
            fn write(&mut self, _path: &str, _payload: &[u8]) -> CapsuleResult<()> {
                Err(CapsuleError::Archive("disk full".into()))
            }
        }

        let plan = plan();
        let fetcher = ScriptedFetcher::new(None);

        let err = execute(&plan, &fetcher, &mut BrokenSink).await.unwrap_err();

        assert!(matches!(err, CapsuleError::Archive(_)));
        assert_eq!(*fetcher.calls.borrow(), 1);
    }

    #[tokio::test]
    async fn test_empty_plan_succeeds_without_fetching() {
        let fetcher = ScriptedFetcher::new(Some(1));
        let mut sink = MemorySink::default();

        let stats = execute(&Plan::default(), &fetcher, &mut sink).await.unwrap();

        assert_eq!(stats, SnapshotStats::default());
        assert!(sink.written.is_empty());
    }
}
