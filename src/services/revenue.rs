//! Revenue service

use crate::error::{LedgerError, LedgerResult};
use crate::models::{DateRange, Money, Revenue, RevenueCategory, RevenueId, RevenueInput};
use crate::storage::Storage;

/// Service for revenue management
pub struct RevenueService<'a> {
    storage: &'a Storage,
}

impl<'a> RevenueService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(&self, input: RevenueInput) -> LedgerResult<Revenue> {
        let draft = input.validate()?;
        let _lock = self.storage.begin_write()?;
        let revenue = self
            .storage
            .revenues
            .insert_with(|id| Revenue::from_draft(id, draft))?;

        tracing::info!(id = %revenue.id, value = %revenue.value, "revenue recorded");
        Ok(revenue)
    }

    pub fn get(&self, id: RevenueId) -> LedgerResult<Option<Revenue>> {
        self.storage.revenues.get(id)
    }

    pub fn require(&self, id: RevenueId) -> LedgerResult<Revenue> {
        self.get(id)?
            .ok_or_else(|| LedgerError::revenue_not_found(id))
    }

    pub fn list(&self) -> LedgerResult<Vec<Revenue>> {
        self.storage.revenues.get_all()
    }

    /// Revenues received within the range, bounds included
    pub fn find_by_date_range(&self, range: &DateRange) -> LedgerResult<Vec<Revenue>> {
        self.storage.revenues.get_by_receipt_date(range)
    }

    pub fn find_by_category(&self, category: RevenueCategory) -> LedgerResult<Vec<Revenue>> {
        self.storage.revenues.get_by_category(category)
    }

    /// Full replacement of an existing revenue
    pub fn update(&self, id: RevenueId, input: RevenueInput) -> LedgerResult<Revenue> {
        let draft = input.validate()?;
        let _lock = self.storage.begin_write()?;
        let mut revenue = self.require(id)?;
        revenue.replace_with(draft);
        let revenue = self.storage.revenues.replace(revenue)?;

        tracing::info!(id = %id, "revenue updated");
        Ok(revenue)
    }

    pub fn delete(&self, id: RevenueId) -> LedgerResult<()> {
        let _lock = self.storage.begin_write()?;
        if !self.storage.revenues.delete(id)? {
            return Err(LedgerError::revenue_not_found(id));
        }
        tracing::info!(id = %id, "revenue deleted");
        Ok(())
    }

    /// Sum of all revenue values; zero when there are none
    pub fn total_revenue(&self) -> LedgerResult<Money> {
        Ok(self
            .storage
            .revenues
            .sum_values()?
            .unwrap_or_else(Money::zero))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, storage)
    }

    fn input(value: &str, received: &str, description: &str) -> RevenueInput {
        RevenueInput {
            value: Some(value.into()),
            receipt_date: Some(received.into()),
            expected_receipt_date: Some(received.into()),
            description: Some(description.into()),
            account: Some(1),
            category: Some("SALARY".into()),
        }
    }

    #[test]
    fn test_create_and_total() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RevenueService::new(&storage);
        assert_eq!(service.total_revenue().unwrap(), Money::zero());

        let created = service.create(input("3000", "05-01-2024", "Salary")).unwrap();
        service.create(input("250.75", "20-01-2024", "Bonus")).unwrap();

        assert_eq!(service.require(created.id).unwrap().description, "Salary");
        assert_eq!(service.total_revenue().unwrap(), Money::from_cents(325_075));
    }

    #[test]
    fn test_blank_description_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RevenueService::new(&storage);

        match service.create(input("1", "05-01-2024", "   ")).unwrap_err() {
            LedgerError::Validation(errors) => assert!(errors.has_field("description")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_filters_and_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = RevenueService::new(&storage);
        let jan = service.create(input("1", "31-01-2024", "a")).unwrap();
        service.create(input("2", "01-02-2024", "b")).unwrap();

        let range = DateRange::parse(Some("01-01-2024"), Some("31-01-2024")).unwrap();
        let found = service.find_by_date_range(&range).unwrap();
        assert_eq!(found, vec![jan.clone()]);
        assert!(service.find_by_category(RevenueCategory::Prize).unwrap().is_empty());

        service.delete(jan.id).unwrap();
        assert!(service.require(jan.id).unwrap_err().is_not_found());
    }
}
