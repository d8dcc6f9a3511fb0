use crate::order::{
    model::Order,
    options::{BagelBase, Cheese, Condiment, EggStyle, Meat, NameColor, Shmear, TextStyle, Veggie},
};

/// Handle returned by [`OrderStore::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Order)>;

/// Owns the current [`Order`] for one session.
///
/// The order is never mutated in place: every operation builds a replacement value, swaps it
/// in, and notifies subscribers with the new order. Operations that would produce an identical
/// order still notify, so a listener can rely on one callback per operation.
pub struct OrderStore {
    order: Order,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl std::fmt::Debug for OrderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderStore")
            .field("order", &self.order)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore {
    pub fn new() -> Self {
        Self::with_order(Order::default())
    }

    pub fn with_order(order: Order) -> Self {
        Self {
            order,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn subscribe(&mut self, f: impl FnMut(&Order) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn replace(&mut self, next: Order) {
        self.order = next;
        tracing::trace!(order = ?self.order, "order replaced");
        for (_, f) in &mut self.subscribers {
            f(&self.order);
        }
    }

    fn update(&mut self, edit: impl FnOnce(&mut Order)) {
        let mut next = self.order.clone();
        edit(&mut next);
        self.replace(next);
    }

    pub fn set_base(&mut self, base: BagelBase) {
        self.update(|o| o.base = base);
    }

    pub fn set_toasted(&mut self, toasted: bool) {
        self.update(|o| o.toasted = toasted);
    }

    pub fn toggle_toasted(&mut self) {
        self.update(|o| o.toasted = !o.toasted);
    }

    pub fn set_shmear(&mut self, shmear: Shmear) {
        self.update(|o| o.shmear = shmear);
    }

    pub fn set_egg(&mut self, egg: Option<EggStyle>) {
        self.update(|o| o.egg = egg);
    }

    pub fn set_meat(&mut self, meat: Option<Meat>) {
        self.update(|o| o.meat = meat);
    }

    pub fn set_cheese(&mut self, cheese: Option<Cheese>) {
        self.update(|o| o.cheese = cheese);
    }

    pub fn toggle_veggie(&mut self, veggie: Veggie) {
        self.update(|o| {
            if !o.veggies.remove(&veggie) {
                o.veggies.insert(veggie);
            }
        });
    }

    pub fn toggle_condiment(&mut self, condiment: Condiment) {
        self.update(|o| {
            if !o.condiments.remove(&condiment) {
                o.condiments.insert(condiment);
            }
        });
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.update(|o| o.customer_name = name);
    }

    pub fn set_name_color(&mut self, color: NameColor) {
        self.update(|o| o.name_color = color);
    }

    pub fn set_text_style(&mut self, style: TextStyle) {
        self.update(|o| o.text_style = style);
    }

    /// Replace the order with the session-start defaults.
    pub fn reset(&mut self) {
        self.replace(Order::default());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/order/store.rs"]
mod tests;
