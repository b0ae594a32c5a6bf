use crate::server::{
    data::top_list::TopListRepository,
    model::top_list::{TopSong, TopTmdb},
};
use entity::top_tmdb::TmdbMediaType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod remove;
mod replace;
