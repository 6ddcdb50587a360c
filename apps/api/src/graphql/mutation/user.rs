//! User mutations for GraphQLZero
//!
//! Users are the only resource with nested inputs: address (with geo
//! coordinates) and company are forwarded as whole objects.

use async_graphql::{Context, InputObject, Object, Result, ResultExt, ID};

use crate::error::ApiError;
use crate::graphql::debug::DebugLog;
use crate::graphql::types::User;
use crate::graphql::validation::{optional_text, require_text};
use crate::models::{Address, Company, Geo, NewUser, UserChanges};
use crate::repositories::UserRepository;

// =============================================================================
// Input Types
// =============================================================================

#[derive(Debug, Clone, InputObject)]
pub struct AddressInput {
    pub street: Option<String>,
    pub suite: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub geo: Option<GeoInput>,
}

#[derive(Debug, Clone, InputObject)]
pub struct GeoInput {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

#[derive(Debug, Clone, InputObject)]
pub struct CompanyInput {
    pub name: Option<String>,
    pub catch_phrase: Option<String>,
    pub bs: Option<String>,
}

/// Input for creating a user
#[derive(Debug, InputObject)]
pub struct CreateUserInput {
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Option<AddressInput>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company: Option<CompanyInput>,
}

/// Input for updating a user; a supplied address or company replaces the old one
#[derive(Debug, InputObject)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub address: Option<AddressInput>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company: Option<CompanyInput>,
}

impl From<AddressInput> for Address {
    fn from(input: AddressInput) -> Self {
        Self {
            street: input.street,
            suite: input.suite,
            city: input.city,
            zipcode: input.zipcode,
            geo: input.geo.map(Into::into),
        }
    }
}

impl From<GeoInput> for Geo {
    fn from(input: GeoInput) -> Self {
        Self {
            lat: input.lat,
            lng: input.lng,
        }
    }
}

impl From<CompanyInput> for Company {
    fn from(input: CompanyInput) -> Self {
        Self {
            name: input.name,
            catch_phrase: input.catch_phrase,
            bs: input.bs,
        }
    }
}

impl TryFrom<CreateUserInput> for NewUser {
    type Error = ApiError;

    fn try_from(input: CreateUserInput) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require_text("name", input.name)?,
            username: require_text("username", input.username)?,
            email: require_text("email", input.email)?,
            address: input.address.map(Into::into),
            phone: input.phone,
            website: input.website,
            company: input.company.map(Into::into),
        })
    }
}

impl TryFrom<UpdateUserInput> for UserChanges {
    type Error = ApiError;

    fn try_from(input: UpdateUserInput) -> Result<Self, Self::Error> {
        Ok(Self {
            name: optional_text("name", input.name)?,
            username: optional_text("username", input.username)?,
            email: optional_text("email", input.email)?,
            address: input.address.map(Into::into),
            phone: input.phone,
            website: input.website,
            company: input.company.map(Into::into),
        })
    }
}

// =============================================================================
// Mutations
// =============================================================================

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Create a user
    async fn create_user(&self, ctx: &Context<'_>, input: CreateUserInput) -> Result<Option<User>> {
        ctx.data::<DebugLog>()?.operation("createUser", &input);
        let new_user = NewUser::try_from(input).extend()?;

        let user = ctx.data::<UserRepository>()?.create(&new_user).await.extend()?;
        Ok(Some(user.into()))
    }

    /// Update the supplied fields of a user
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateUserInput,
    ) -> Result<Option<User>> {
        ctx.data::<DebugLog>()?
            .operation("updateUser", (id.as_str(), &input));
        let changes = UserChanges::try_from(input).extend()?;

        let user = ctx
            .data::<UserRepository>()?
            .update(&id, &changes)
            .await
            .extend()?;
        Ok(Some(user.into()))
    }

    /// Delete a user
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<bool>> {
        ctx.data::<DebugLog>()?.operation("deleteUser", id.as_str());

        let deleted = ctx.data::<UserRepository>()?.delete(&id).await.extend()?;
        Ok(Some(deleted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn create_input() -> CreateUserInput {
        CreateUserInput {
            name: "Ada Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            address: Some(AddressInput {
                street: Some("St James's Square".to_string()),
                suite: None,
                city: Some("London".to_string()),
                zipcode: None,
                geo: Some(GeoInput {
                    lat: Some("51.507".to_string()),
                    lng: Some("-0.135".to_string()),
                }),
            }),
            phone: None,
            website: None,
            company: None,
        }
    }

    #[test]
    fn test_create_converts_nested_address() {
        let user = NewUser::try_from(create_input()).unwrap();
        let address = user.address.unwrap();
        assert_eq!(address.city.as_deref(), Some("London"));
        assert_eq!(address.geo.unwrap().lng.as_deref(), Some("-0.135"));
    }

    #[test]
    fn test_create_rejects_blank_username() {
        let input = CreateUserInput {
            username: "\t".to_string(),
            ..create_input()
        };
        assert_matches!(
            NewUser::try_from(input),
            Err(ApiError::ValidationError(msg)) if msg.contains("username")
        );
    }
}
