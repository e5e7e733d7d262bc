//! Declarative test builder.
//!
//! Configuration methods only queue work; tables, fixtures and mock endpoints are created
//! in that order when `build()` is awaited.

use mockito::{Mock, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_inventory_tables: bool,

    starter_cases: bool,
    cases: Vec<String>,
    users: Vec<(String, Option<String>)>, // (firebase_uid, email)

    mock_builders: Vec<Box<dyn FnOnce(&mut ServerGuard) -> Mock>>,
    jwks_endpoints: Vec<usize>, // expected requests
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_inventory_tables: false,
            starter_cases: false,
            cases: Vec::new(),
            users: Vec::new(),
            mock_builders: Vec::new(),
            jwks_endpoints: Vec::new(),
        }
    }

    /// Create the users, cases, items and inventory_details tables.
    pub fn with_inventory_tables(mut self) -> Self {
        self.include_inventory_tables = true;
        self
    }

    /// Add a single entity table, chain calls to add several.
    ///
    /// Useful to build a schema that is deliberately missing tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert the Weapon, Bravo and Hydra cases into the catalog.
    pub fn with_starter_cases(mut self) -> Self {
        self.starter_cases = true;
        self
    }

    /// Insert a case with the given name into the catalog.
    pub fn with_case(mut self, case_name: &str) -> Self {
        self.cases.push(case_name.to_string());
        self
    }

    /// Insert a user row for the Firebase UID.
    pub fn with_user(mut self, firebase_uid: &str, email: Option<&str>) -> Self {
        self.users
            .push((firebase_uid.to_string(), email.map(str::to_string)));
        self
    }

    /// Serve the signing key from the mock JWK endpoint.
    ///
    /// # Arguments
    /// - `expected_requests` - Number of times the endpoint is expected to be hit
    pub fn with_jwks_endpoint(mut self, expected_requests: usize) -> Self {
        self.jwks_endpoints.push(expected_requests);
        self
    }

    /// Add a custom mock endpoint built from the mock server.
    ///
    /// Custom endpoints are created before the shortcut endpoints so they take priority
    /// when they share a path.
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Build the test context, executing all queued operations.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_inventory_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Users),
                schema.create_table_from_entity(entity::prelude::Cases),
                schema.create_table_from_entity(entity::prelude::Items),
                schema.create_table_from_entity(entity::prelude::InventoryDetails),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        if self.starter_cases {
            setup.inventory().insert_starter_cases().await?;
        }

        for case_name in self.cases {
            setup.inventory().insert_case(&case_name).await?;
        }

        for (firebase_uid, email) in self.users {
            setup
                .user()
                .insert_user(&firebase_uid, email.as_deref())
                .await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for expected_requests in self.jwks_endpoints {
            mocks.push(setup.auth().create_jwks_endpoint(expected_requests));
        }

        setup.mocks.extend(mocks);

        Ok(setup)
    }
}
