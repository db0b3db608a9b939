//! Shared fixtures for replay specs

pub use sbp_adapters::{Driver, FakeDriver, FileDriver, TracedDriver};
pub use sbp_core::{
    Dispatch, DispatchError, Message, MessageTable, MsgGpsTime, MsgHeartbeat, MsgLog, MsgPrint,
    MsgStartup, SbpFrame, MSG_GPS_TIME, MSG_HEARTBEAT, MSG_LOG, MSG_PRINT, MSG_STARTUP,
};
pub use sbp_storage::{
    AnyFormat, JsonFormat, LogError, LogIterator, LogState, LogWriter, PickleFormat, ReplayConfig,
};

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Wall-clock start of every generated session, in milliseconds
pub const SESSION_START: i64 = 1_417_547_270_000;

/// The `i`th message of a synthetic receiver session
pub fn session_message(i: usize) -> Box<dyn Message> {
    let sender = 0x42;
    match i % 5 {
        0 => Box::new(MsgHeartbeat {
            sender,
            flags: (i % 2) as u32,
        }),
        1 => Box::new(MsgGpsTime {
            sender,
            wn: 1787,
            tow: 2_567_800 + i as u32 * 100,
            ns_residual: -(i as i32),
            flags: 1,
        }),
        2 => Box::new(MsgPrint {
            sender,
            text: format!("INFO: tracking {} satellites\n", i % 12),
        }),
        3 => Box::new(MsgLog {
            sender,
            level: 6,
            text: format!("solution {}", i),
        }),
        _ => Box::new(MsgStartup {
            sender,
            cause: 0,
            startup_type: (i % 3) as u8,
            reserved: 0,
        }),
    }
}

/// Timestamp of the `i`th record; steps are uneven on purpose
pub fn session_timestamp(i: usize) -> i64 {
    SESSION_START + (i as i64) * 100 + (i % 7) as i64
}

/// A log recorded to a temporary directory
pub struct LogFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl LogFixture {
    /// Record `count` session messages as a pickle log
    pub fn pickle(count: usize) -> Self {
        Self::record("session.pickle", AnyFormat::Pickle(PickleFormat::new()), count)
    }

    /// Record `count` session messages as a JSON log
    pub fn json(count: usize) -> Self {
        Self::record("session.json", AnyFormat::Json(JsonFormat::new()), count)
    }

    fn record(name: &str, format: AnyFormat, count: usize) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        let mut writer = LogWriter::create(&path, format).unwrap();
        for i in 0..count {
            writer
                .append(session_timestamp(i), session_message(i).as_ref())
                .unwrap();
        }
        assert_eq!(writer.records(), count as u64);
        writer.flush().unwrap();
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn driver(&self) -> FileDriver {
        FileDriver::open(&self.path).unwrap()
    }

    pub fn bytes(&self) -> Vec<u8> {
        std::fs::read(&self.path).unwrap()
    }
}

/// Comparable summary of one replayed record
pub fn summarize(item: (i64, i64, Box<dyn Message>)) -> (i64, i64, u16, Vec<u8>) {
    let (delta, timestamp, msg) = item;
    (delta, timestamp, msg.msg_type(), msg.payload())
}
