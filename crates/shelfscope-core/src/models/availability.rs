use serde::{Deserialize, Serialize};

/// One physical copy of a work: where it sits and whether it can be borrowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRecord {
    pub branch_name: String,
    pub shelf_location: String,
    pub call_number: String,
    pub status_desc: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvailabilityField {
    BranchName,
    ShelfLocation,
    CallNumber,
    StatusDesc,
}

impl AvailabilityField {
    pub const ALL: [AvailabilityField; 4] = [
        Self::BranchName,
        Self::ShelfLocation,
        Self::CallNumber,
        Self::StatusDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BranchName => "branchName",
            Self::ShelfLocation => "shelfLocation",
            Self::CallNumber => "callNumber",
            Self::StatusDesc => "statusDesc",
        }
    }
}

/// Field-by-field accumulator for a holdings row.
///
/// Each slot is filled at most once; a second value for the same field is
/// ignored. `finish` only yields a record when every slot was filled, even
/// if some of the values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityDraft {
    branch_name: Option<String>,
    shelf_location: Option<String>,
    call_number: Option<String>,
    status_desc: Option<String>,
}

impl AvailabilityDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the field was already set and `value` was dropped.
    pub fn set(&mut self, field: AvailabilityField, value: String) -> bool {
        let slot = self.slot_mut(field);
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        true
    }

    pub fn get(&self, field: AvailabilityField) -> Option<&str> {
        match field {
            AvailabilityField::BranchName => self.branch_name.as_deref(),
            AvailabilityField::ShelfLocation => self.shelf_location.as_deref(),
            AvailabilityField::CallNumber => self.call_number.as_deref(),
            AvailabilityField::StatusDesc => self.status_desc.as_deref(),
        }
    }

    pub fn missing_fields(&self) -> Vec<AvailabilityField> {
        AvailabilityField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    pub fn finish(self) -> Option<AvailabilityRecord> {
        Some(AvailabilityRecord {
            branch_name: self.branch_name?,
            shelf_location: self.shelf_location?,
            call_number: self.call_number?,
            status_desc: self.status_desc?,
        })
    }

    fn slot_mut(&mut self, field: AvailabilityField) -> &mut Option<String> {
        match field {
            AvailabilityField::BranchName => &mut self.branch_name,
            AvailabilityField::ShelfLocation => &mut self.shelf_location,
            AvailabilityField::CallNumber => &mut self.call_number,
            AvailabilityField::StatusDesc => &mut self.status_desc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> AvailabilityDraft {
        let mut draft = AvailabilityDraft::new();
        draft.set(AvailabilityField::BranchName, "Jurong Regional Library".into());
        draft.set(AvailabilityField::ShelfLocation, "Adult Lending".into());
        draft.set(AvailabilityField::CallNumber, "English 823.92 ROW".into());
        draft.set(AvailabilityField::StatusDesc, "Available".into());
        draft
    }

    #[test]
    fn test_finish_requires_all_fields() {
        let mut draft = AvailabilityDraft::new();
        draft.set(AvailabilityField::BranchName, "Bedok Public Library".into());
        draft.set(AvailabilityField::CallNumber, "English 005.133 KLA".into());
        assert_eq!(
            draft.missing_fields(),
            vec![AvailabilityField::ShelfLocation, AvailabilityField::StatusDesc]
        );
        assert!(draft.finish().is_none());
    }

    #[test]
    fn test_empty_string_counts_as_present() {
        let mut draft = AvailabilityDraft::new();
        draft.set(AvailabilityField::BranchName, String::new());
        draft.set(AvailabilityField::ShelfLocation, String::new());
        draft.set(AvailabilityField::CallNumber, "English 823.92 ROW".into());
        draft.set(AvailabilityField::StatusDesc, "Available".into());
        let record = draft.finish().unwrap();
        assert_eq!(record.branch_name, "");
        assert_eq!(record.status_desc, "Available");
    }

    #[test]
    fn test_first_value_wins() {
        let mut draft = full_draft();
        assert!(!draft.set(AvailabilityField::StatusDesc, "On Loan".into()));
        let record = draft.finish().unwrap();
        assert_eq!(record.status_desc, "Available");
    }

    #[test]
    fn test_record_serializes_with_camel_case_keys() {
        let record = full_draft().finish().unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["branchName"], "Jurong Regional Library");
        assert_eq!(json["shelfLocation"], "Adult Lending");
        assert_eq!(json["callNumber"], "English 823.92 ROW");
        assert_eq!(json["statusDesc"], "Available");
        for field in AvailabilityField::ALL {
            assert!(json.get(field.as_str()).is_some());
        }
    }
}
