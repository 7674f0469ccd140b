//! Mapping from `dnscrawler_domain::RecordType` to `hickory_proto::rr::RecordType`

use dnscrawler_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

/// Maps domain record types onto hickory ones for building queries.
///
/// Parsed answers never go the other way: the response parser reads the
/// record data variant directly.
pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        HickoryRecordType::from(record_type.to_u16())
    }
}
