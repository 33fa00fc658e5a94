//! Реестр модулей дашборда.
//!
//! Каждый виджет описан записью индекса с ленивым загрузчиком. Загрузчик
//! для одного id вызывается не больше одного раза за всё время жизни
//! процесса: кэш хранит разделяемый фьючерс, так что виджеты, запросившие
//! модуль до завершения загрузки, ждут один и тот же результат, а не
//! плодят запросы. Кэш ничего не вытесняет - и успех, и ошибка остаются
//! закэшированными.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use leptos::prelude::*;

/// Готовый к показу модуль: идентификатор, заголовок и фабрика представления.
#[derive(Clone)]
pub struct StatModule {
    pub id: String,
    pub title: String,
    pub render: Arc<dyn Fn() -> AnyView + Send + Sync>,
}

// `render` - не Debug, поэтому derive невозможен
impl std::fmt::Debug for StatModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatModule")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

pub type ModuleFuture = Shared<LocalBoxFuture<'static, Result<StatModule, String>>>;

/// Фабрика фьючерса загрузки; сам фьючерс не обязан быть Send,
/// он исполняется на единственном потоке.
pub type ModuleLoader = Arc<dyn Fn() -> LocalBoxFuture<'static, Result<StatModule, String>> + Send + Sync>;

/// Запись индекса: что грузить и как подписывать виджет до загрузки.
#[derive(Clone)]
pub struct StatIndexEntry {
    pub id: String,
    pub title: String,
    pub loader: ModuleLoader,
}

/// Кэш загрузок. Отделён от сервиса, чтобы тестироваться без контекста.
pub struct ModuleCache {
    entries: RefCell<HashMap<String, ModuleFuture>>,
}

impl ModuleCache {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Фьючерс модуля по id. Первый вызов запускает загрузчик, остальные
    /// получают клон того же разделяемого фьючерса.
    pub fn get_or_load(&self, id: &str, loader: &ModuleLoader) -> ModuleFuture {
        if let Some(existing) = self.entries.borrow().get(id) {
            return existing.clone();
        }
        let future = loader().shared();
        self.entries
            .borrow_mut()
            .insert(id.to_string(), future.clone());
        future
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.borrow().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Default for ModuleCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Сервис реестра. Кэш живёт в локальном хранилище потока
/// (RefCell внутри), сам хэндл копируемый, как остальные сервисы.
#[derive(Clone, Copy)]
pub struct StatRegistry {
    cache: StoredValue<ModuleCache, LocalStorage>,
}

impl StatRegistry {
    pub fn new() -> Self {
        Self {
            cache: StoredValue::new_local(ModuleCache::new()),
        }
    }

    pub fn load(&self, entry: &StatIndexEntry) -> ModuleFuture {
        self.cache
            .with_value(|cache| cache.get_or_load(&entry.id, &entry.loader))
    }
}

impl Default for StatRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Создаётся один раз при старте приложения и никогда не разрушается.
pub fn provide_stat_registry() -> StatRegistry {
    let registry = StatRegistry::new();
    provide_context(registry);
    registry
}

pub fn use_stat_registry() -> StatRegistry {
    use_context::<StatRegistry>().expect("StatRegistry not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::LocalPool;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_loader(id: &'static str, calls: Arc<AtomicUsize>) -> ModuleLoader {
        Arc::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            async move {
                Ok(StatModule {
                    id: id.to_string(),
                    title: format!("Модуль {}", id),
                    render: Arc::new(|| ().into_any()),
                })
            }
            .boxed_local()
        })
    }

    fn failing_loader(calls: Arc<AtomicUsize>) -> ModuleLoader {
        Arc::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Err("Request failed: 503".to_string()) }.boxed_local()
        })
    }

    #[test]
    fn test_loader_runs_once_per_id() {
        let cache = ModuleCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = counting_loader("total-balance", calls.clone());

        let _first = cache.get_or_load("total-balance", &loader);
        let _second = cache.get_or_load("total-balance", &loader);
        let _third = cache.get_or_load("total-balance", &loader);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_concurrent_callers_share_one_future() {
        let cache = ModuleCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = counting_loader("total-balance", calls.clone());

        // оба запросили до того, как кто-либо дождался результата
        let first = cache.get_or_load("total-balance", &loader);
        let second = cache.get_or_load("total-balance", &loader);
        assert!(first.ptr_eq(&second));

        let mut pool = LocalPool::new();
        let module = pool.run_until(first).unwrap();
        assert_eq!(module.id, "total-balance");

        // второй ждёт уже разрешённый фьючерс, загрузчик не перезапускается
        let module_again = pool.run_until(second).unwrap();
        assert_eq!(module_again.title, "Модуль total-balance");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resolved_module_stays_cached() {
        let cache = ModuleCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = counting_loader("loans-outstanding", calls.clone());

        let mut pool = LocalPool::new();
        let first = cache.get_or_load("loans-outstanding", &loader);
        pool.run_until(first).unwrap();

        let later = cache.get_or_load("loans-outstanding", &loader);
        pool.run_until(later).unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(cache.contains("loans-outstanding"));
    }

    #[test]
    fn test_distinct_ids_load_independently() {
        let cache = ModuleCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = counting_loader("a", calls.clone());

        let first = cache.get_or_load("first", &loader);
        let second = cache.get_or_load("second", &loader);

        assert!(!first.ptr_eq(&second));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_failure_is_cached_like_success() {
        let cache = ModuleCache::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = failing_loader(calls.clone());

        let mut pool = LocalPool::new();
        let first = cache.get_or_load("broken", &loader);
        let err = pool.run_until(first).unwrap_err();
        assert!(err.contains("503"));

        // повторный запрос отдаёт тот же проваленный фьючерс, без ретрая
        let second = cache.get_or_load("broken", &loader);
        let err_again = pool.run_until(second).unwrap_err();
        assert_eq!(err_again, err);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
