use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};
use serde_dynamo::{from_item, to_item};

use super::USER_PK;
use crate::auth::{self, Role};
use crate::{AError, AResult, AppState};

#[derive(Serialize, Deserialize)]
pub struct User {
    pub pk: String, // always "User"
    pub sk: String, // username, unique per user
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

#[derive(Deserialize)]
pub struct UserFC {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Deserialize)]
pub struct LoginFC {
    pub username: String,
    pub password: String,
}

// DynamoDB handlers
impl User {
    pub async fn ddb_register(state: &AppState, user_fc: UserFC) -> AResult<()> {
        let user = User {
            pk: String::from(USER_PK),
            sk: user_fc.username,
            email: user_fc.email,
            password_hash: auth::hash_password(&user_fc.password)?,
            role: user_fc.role,
        };
        let item = to_item(user)?;

        let req = state
            .dynamodb_client
            .put_item()
            .table_name(&state.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(pk) AND attribute_not_exists(sk)");

        match req.send().await {
            Ok(_) => Ok(()),
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_conditional_check_failed_exception() {
                    return Err(AError::DuplicateUser);
                }
                Err(anyhow::Error::from(service_err).into())
            }
        }
    }

    pub async fn ddb_find(state: &AppState, username: &str) -> AResult<Option<User>> {
        let res = state
            .dynamodb_client
            .get_item()
            .table_name(&state.table_name)
            .key("pk", AttributeValue::S(String::from(USER_PK)))
            .key("sk", AttributeValue::S(username.to_owned()))
            .send()
            .await?;

        match res.item {
            Some(item) => Ok(Some(from_item(item)?)),
            None => Ok(None),
        }
    }

    // An unknown username and a wrong password are indistinguishable to the caller.
    pub async fn verify_credentials(state: &AppState, login_fc: LoginFC) -> AResult<User> {
        let user = User::ddb_find(state, &login_fc.username)
            .await?
            .ok_or(AError::InvalidCredentials)?;

        if !auth::verify_password(&login_fc.password, &user.password_hash)? {
            return Err(AError::InvalidCredentials);
        }

        Ok(user)
    }
}
