use crate::domain::page_data::{ContentComponentData, PageData, SingleComponentData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageDataDto {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub page_id: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<PageData> for PageDataDto {
    fn from(data: PageData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            title: data.title,
            description: data.description,
            page_id: data.page_id.into(),
            created_at: data.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SingleComponentDataDto {
    pub name: String,
    pub sort_index: i32,
    pub field1: Option<String>,
    pub field2: Option<String>,
    pub field3: Option<String>,
    pub field4: Option<String>,
    pub field5: Option<String>,
}

impl From<SingleComponentData> for SingleComponentDataDto {
    fn from(single: SingleComponentData) -> Self {
        Self {
            name: single.name,
            sort_index: single.sort_index,
            field1: single.field1,
            field2: single.field2,
            field3: single.field3,
            field4: single.field4,
            field5: single.field5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentComponentDataDto {
    pub id: i64,
    pub sign: String,
    pub single_datas: Vec<SingleComponentDataDto>,
}

impl From<ContentComponentData> for ContentComponentDataDto {
    fn from(data: ContentComponentData) -> Self {
        Self {
            id: data.id,
            sign: data.sign,
            single_datas: data.single_datas.into_iter().map(Into::into).collect(),
        }
    }
}
