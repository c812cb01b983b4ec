//! `Resource` bindings for the four record tables.

use chrono::NaiveDateTime;
use serde::Deserialize;

use models::{articles, menu_item_review, recommendation_request, ucsb_organization};

use crate::resource::Resource;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleParams {
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    #[serde(deserialize_with = "models::timestamp::deserialize")]
    pub date_added: NaiveDateTime,
}

impl Resource for articles::Model {
    type Key = i64;
    type Params = ArticleParams;
    const NAME: &'static str = "Article";
    const PATH: &'static str = "/api/articles";

    fn from_params(p: ArticleParams) -> Self {
        Self {
            id: 0,
            title: p.title,
            url: p.url,
            explanation: p.explanation,
            email: p.email,
            date_added: p.date_added,
        }
    }

    fn key(&self) -> i64 { self.id }

    fn set_key(&mut self, key: i64) { self.id = key; }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReviewParams {
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    pub comments: String,
    #[serde(deserialize_with = "models::timestamp::deserialize")]
    pub date_reviewed: NaiveDateTime,
}

impl Resource for menu_item_review::Model {
    type Key = i64;
    type Params = MenuItemReviewParams;
    const NAME: &'static str = "MenuItemReview";
    const PATH: &'static str = "/api/menuitemreviews";

    fn from_params(p: MenuItemReviewParams) -> Self {
        Self {
            id: 0,
            item_id: p.item_id,
            reviewer_email: p.reviewer_email,
            stars: p.stars,
            comments: p.comments,
            date_reviewed: p.date_reviewed,
        }
    }

    fn key(&self) -> i64 { self.id }

    fn set_key(&mut self, key: i64) { self.id = key; }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequestParams {
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    #[serde(deserialize_with = "models::timestamp::deserialize")]
    pub date_requested: NaiveDateTime,
    #[serde(deserialize_with = "models::timestamp::deserialize")]
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl Resource for recommendation_request::Model {
    type Key = i64;
    type Params = RecommendationRequestParams;
    const NAME: &'static str = "RecommendationRequest";
    const PATH: &'static str = "/api/recommendationrequest";

    fn from_params(p: RecommendationRequestParams) -> Self {
        Self {
            id: 0,
            requester_email: p.requester_email,
            professor_email: p.professor_email,
            explanation: p.explanation,
            date_requested: p.date_requested,
            date_needed: p.date_needed,
            done: p.done,
        }
    }

    fn key(&self) -> i64 { self.id }

    fn set_key(&mut self, key: i64) { self.id = key; }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationParams {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Resource for ucsb_organization::Model {
    type Key = String;
    type Params = OrganizationParams;
    const NAME: &'static str = "UCSBOrganization";
    const PATH: &'static str = "/api/ucsborganizations";
    const GET_PARAM: &'static str = "orgCode";

    fn from_params(p: OrganizationParams) -> Self {
        Self {
            org_code: p.org_code,
            org_translation_short: p.org_translation_short,
            org_translation: p.org_translation,
            inactive: p.inactive,
        }
    }

    fn key(&self) -> String { self.org_code.clone() }

    fn set_key(&mut self, key: String) { self.org_code = key; }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_params_leave_key_unassigned() {
        let p: ArticleParams = serde_json::from_value(serde_json::json!({
            "title": "t", "url": "u", "explanation": "e", "email": "a@ucsb.edu",
            "dateAdded": "2022-01-03T00:00:00"
        }))
        .unwrap();
        let a = articles::Model::from_params(p);
        assert_eq!(a.id, 0);
        assert_eq!(a.email, "a@ucsb.edu");
    }

    #[test]
    fn params_accept_minute_precision_timestamps() {
        let p: MenuItemReviewParams = serde_json::from_value(serde_json::json!({
            "itemId": 7, "reviewerEmail": "s@ucsb.edu", "stars": 5, "comments": "amazing",
            "dateReviewed": "2023-01-03T00:00"
        }))
        .unwrap();
        assert_eq!(p.date_reviewed, "2023-01-03T00:00:00".parse::<NaiveDateTime>().unwrap());
    }

    #[test]
    fn organization_key_is_the_code() {
        let mut org = ucsb_organization::Model::from_params(OrganizationParams {
            org_code: "ZPR".into(),
            org_translation_short: "ZETA PHI RHO".into(),
            org_translation: "ZETA PHI RHO".into(),
            inactive: false,
        });
        assert_eq!(org.key(), "ZPR");
        org.set_key("SKY".into());
        assert_eq!(org.org_code, "SKY");
        assert_eq!(<ucsb_organization::Model as Resource>::GET_PARAM, "orgCode");
    }

    #[test]
    fn entity_names_and_paths() {
        assert_eq!(<menu_item_review::Model as Resource>::NAME, "MenuItemReview");
        assert_eq!(<recommendation_request::Model as Resource>::PATH, "/api/recommendationrequest");
        assert_eq!(<articles::Model as Resource>::GET_PARAM, "id");
    }
}
