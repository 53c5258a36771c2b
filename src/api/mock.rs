//! In-memory stand-in for the menu backend, used by controller and app tests.

use super::{ClientError, ClientResult, FOODS_PATH, HttpClient};
use crate::food::Food;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct MockClient {
    foods: Mutex<Vec<Food>>,
    requests: Mutex<Vec<String>>,
    failing: AtomicBool,
    /// When set, POST answers with this id instead of echoing the body.
    assigned_id: Mutex<Option<u64>>,
}

impl MockClient {
    pub fn new(foods: Vec<Food>) -> Self {
        Self {
            foods: Mutex::new(foods),
            requests: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
            assigned_id: Mutex::new(None),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn assign_ids_from_server(&self, id: u64) {
        *self.assigned_id.lock().unwrap() = Some(id);
    }

    /// Add a plate on the server side only, as another client would.
    pub fn insert_server_food(&self, food: Food) {
        self.foods.lock().unwrap().push(food);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn server_foods(&self) -> Vec<Food> {
        self.foods.lock().unwrap().clone()
    }

    fn record(&self, method: &str, path: &str) -> ClientResult<()> {
        self.requests
            .lock()
            .unwrap()
            .push(format!("{} /{}", method, path));
        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::Status {
                status: 500,
                message: "backend unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn id_from_path(path: &str) -> ClientResult<u64> {
        path.rsplit('/')
            .next()
            .and_then(|id| id.parse().ok())
            .ok_or_else(|| ClientError::NotFound(path.to_string()))
    }
}

fn decode<T: DeserializeOwned>(value: serde_json::Value) -> ClientResult<T> {
    Ok(serde_json::from_value(value)?)
}

#[async_trait]
impl HttpClient for MockClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.record("GET", path)?;
        if path != FOODS_PATH {
            return Err(ClientError::NotFound(path.to_string()));
        }
        let foods = self.server_foods();
        decode(serde_json::to_value(foods)?)
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.record("POST", path)?;
        let mut food: Food = serde_json::from_value(serde_json::to_value(body)?)?;
        if let Some(id) = *self.assigned_id.lock().unwrap() {
            food.id = id;
        }
        self.foods.lock().unwrap().push(food.clone());
        decode(serde_json::to_value(food)?)
    }

    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.record("PUT", path)?;
        let id = Self::id_from_path(path)?;
        let food: Food = serde_json::from_value(serde_json::to_value(body)?)?;
        let mut foods = self.foods.lock().unwrap();
        let slot = foods
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| ClientError::NotFound(path.to_string()))?;
        *slot = food.clone();
        decode(serde_json::to_value(food)?)
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.record("DELETE", path)?;
        let id = Self::id_from_path(path)?;
        self.foods.lock().unwrap().retain(|f| f.id != id);
        decode(serde_json::Value::Null)
    }
}

pub fn plate(id: u64, name: &str) -> Food {
    Food {
        id,
        name: name.to_string(),
        image: format!("https://storage.example.com/{}.png", id),
        price: "19.90".to_string(),
        description: format!("{} with house sauce", name),
        available: true,
    }
}
