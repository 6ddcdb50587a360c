//! User GraphQL type
//!
//! Users own posts, albums and todos. Each of those is exposed as a paged
//! relation fetched from the nested upstream collection.

use async_graphql::{Context, Object, Result, ResultExt, SimpleObject, ID};

use crate::graphql::debug::DebugLog;
use crate::models::user::{Address as ModelAddress, Company as ModelCompany, Geo as ModelGeo};
use crate::models::{Album as ModelAlbum, Post as ModelPost, Todo as ModelTodo, User as ModelUser};
use crate::repositories::UserRepository;

use super::album::Album;
use super::page::{page_options, Page, PageQueryOptionsInput};
use super::post::Post;
use super::todo::Todo;

/// Postal address
#[derive(Debug, Clone, SimpleObject)]
pub struct Address {
    pub street: Option<String>,
    pub suite: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub geo: Option<Geo>,
}

/// Latitude and longitude
#[derive(Debug, Clone, SimpleObject)]
pub struct Geo {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

/// Employer details
#[derive(Debug, Clone, SimpleObject)]
pub struct Company {
    pub name: Option<String>,
    pub catch_phrase: Option<String>,
    pub bs: Option<String>,
}

impl From<ModelAddress> for Address {
    fn from(address: ModelAddress) -> Self {
        Self {
            street: address.street,
            suite: address.suite,
            city: address.city,
            zipcode: address.zipcode,
            geo: address.geo.map(Into::into),
        }
    }
}

impl From<ModelGeo> for Geo {
    fn from(geo: ModelGeo) -> Self {
        Self {
            lat: geo.lat,
            lng: geo.lng,
        }
    }
}

impl From<ModelCompany> for Company {
    fn from(company: ModelCompany) -> Self {
        Self {
            name: company.name,
            catch_phrase: company.catch_phrase,
            bs: company.bs,
        }
    }
}

/// A registered user
pub struct User {
    inner: ModelUser,
}

impl From<ModelUser> for User {
    fn from(user: ModelUser) -> Self {
        Self { inner: user }
    }
}

impl User {
    async fn related<C, T>(
        &self,
        ctx: &Context<'_>,
        operation: &str,
        options: Option<PageQueryOptionsInput>,
    ) -> Result<Option<Page<T>>>
    where
        C: crate::models::Resource,
        T: async_graphql::OutputType + From<C>,
    {
        let options = page_options(ctx, options)?;
        ctx.data::<DebugLog>()?
            .operation(operation, (&self.inner.id, &options));

        let page = ctx
            .data::<UserRepository>()?
            .list_related::<C>(&self.inner.id, &options)
            .await
            .extend()?;
        Ok(Some(page.into()))
    }
}

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// Full name
    async fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    /// Login handle
    async fn username(&self) -> Option<&str> {
        self.inner.username.as_deref()
    }

    async fn email(&self) -> Option<&str> {
        self.inner.email.as_deref()
    }

    async fn address(&self) -> Option<Address> {
        self.inner.address.clone().map(Into::into)
    }

    async fn phone(&self) -> Option<&str> {
        self.inner.phone.as_deref()
    }

    async fn website(&self) -> Option<&str> {
        self.inner.website.as_deref()
    }

    async fn company(&self) -> Option<Company> {
        self.inner.company.clone().map(Into::into)
    }

    // Relationship resolvers

    /// Posts written by the user
    async fn posts(
        &self,
        ctx: &Context<'_>,
        options: Option<PageQueryOptionsInput>,
    ) -> Result<Option<Page<Post>>> {
        self.related::<ModelPost, Post>(ctx, "User.posts", options)
            .await
    }

    /// Albums owned by the user
    async fn albums(
        &self,
        ctx: &Context<'_>,
        options: Option<PageQueryOptionsInput>,
    ) -> Result<Option<Page<Album>>> {
        self.related::<ModelAlbum, Album>(ctx, "User.albums", options)
            .await
    }

    /// Todos owned by the user
    async fn todos(
        &self,
        ctx: &Context<'_>,
        options: Option<PageQueryOptionsInput>,
    ) -> Result<Option<Page<Todo>>> {
        self.related::<ModelTodo, Todo>(ctx, "User.todos", options)
            .await
    }
}
