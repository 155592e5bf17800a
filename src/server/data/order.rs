use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of the given user's orders, newest first.
    ///
    /// The ownership filter is unconditional: callers can only ever page
    /// through their own orders.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the orders
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of orders per page
    ///
    /// # Returns
    /// - `Ok((orders, total))` - Orders for the requested page and total
    ///   order count for the user
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated_by_user(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::order::Model>, u64), DbErr> {
        let paginator = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page).await?;

        Ok((orders, total))
    }

    /// Finds an order by id, scoped to the given owner.
    ///
    /// An order owned by someone else comes back as `None`, making it
    /// indistinguishable from a nonexistent one.
    pub async fn find_by_id_for_user(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(id)
            .filter(entity::order::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }
}
