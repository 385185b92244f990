use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create country table
        manager
            .create_table(
                Table::create()
                    .table(Country::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Country::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Country::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Country::Code).string().not_null())
                    .col(ColumnDef::new(Country::Gdp).double().null())
                    .col(ColumnDef::new(Country::Population).big_integer().null())
                    .to_owned(),
            )
            .await?;

        // Create gold_medal table
        manager
            .create_table(
                Table::create()
                    .table(GoldMedal::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GoldMedal::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GoldMedal::Year).integer().not_null())
                    .col(ColumnDef::new(GoldMedal::City).string().not_null())
                    .col(ColumnDef::new(GoldMedal::Season).string().not_null())
                    .col(ColumnDef::new(GoldMedal::Name).string().not_null())
                    .col(ColumnDef::new(GoldMedal::Country).string().not_null())
                    .col(ColumnDef::new(GoldMedal::Gender).string().not_null())
                    .col(ColumnDef::new(GoldMedal::Sport).string().not_null())
                    .col(ColumnDef::new(GoldMedal::Discipline).string().not_null())
                    .col(ColumnDef::new(GoldMedal::Event).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 统计查询按国家、季节、性别过滤
        for (name, column) in [
            ("idx_gold_medal_country", GoldMedal::Country),
            ("idx_gold_medal_season", GoldMedal::Season),
            ("idx_gold_medal_gender", GoldMedal::Gender),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(GoldMedal::Table)
                        .col(column)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GoldMedal::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Country::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Country {
    Table,
    Id,
    Name,
    Code,
    Gdp,
    Population,
}

#[derive(DeriveIden)]
enum GoldMedal {
    Table,
    Id,
    Year,
    City,
    Season,
    Name,
    Country,
    Gender,
    Sport,
    Discipline,
    Event,
}
