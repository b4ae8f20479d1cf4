//! Engagement - the turn loop tying deck, session and registry together.
//!
//! Each turn is either a play (Speak / Act / Execute) or a recovery
//! (Listen / Observe / Assess). Every turn returns a [`TurnResult`]; misuse
//! such as playing a card that is not in hand is reported as a
//! [`PlayRejection`] and leaves all state untouched.
//!
//! ## Turn Flow
//!
//! 1. Player action moves cards between piles.
//! 2. The effect projection computes resource changes.
//! 3. The session applies them.
//! 4. Tiers unlock, gated cards release, termination is checked.
//!
//! ## Resolution
//!
//! Immediate systems apply every resource on play. The deferred system
//! (Physical) pays builder and balance on play and parks the card's progress,
//! loss and understanding on the locked copy until the next recovery.
//!
//! ## Goals
//!
//! Playing a released goal card ends the engagement with
//! [`EngagementOutcome::GoalCompleted`]. Every later turn is rejected.

use tracing::{debug, info};

use super::result::{EngagementSummary, PlayRejection, TurnAction, TurnResult};
use super::state::{EngagementSession, ResourceSnapshot};
use crate::cards::{CardDefinition, CardInstance, CardKind, CardRegistry};
use crate::content::{EngagementDeck, EngagementType, GoalCard, PlayerProfile};
use crate::core::{EngineConfig, EngineError, InstanceAllocator, InstanceId};
use crate::effects::{project, ActionKind, EffectProjection};
use crate::rules::{EngagementOutcome, RecoveryRule, Resolution, System};
use crate::zones::{MovedCards, SessionDeck};

const PENDING_PROGRESS: &str = "pending_progress";
const PENDING_LOSS: &str = "pending_loss";
const PENDING_UNDERSTANDING: &str = "pending_understanding";

/// Deepest depth the player reaches for this card, stat bonus included.
fn max_reachable_depth<S: System>(
    card: &CardDefinition<S>,
    session: &EngagementSession<S>,
    player: &PlayerProfile,
) -> i32 {
    i32::from(session.get_unlocked_max_depth()) + player.depth_bonus_for(card.bound_stat)
}

fn is_accessible<S: System>(card: &CardDefinition<S>, session: &EngagementSession<S>, player: &PlayerProfile) -> bool {
    i32::from(card.depth) <= max_reachable_depth(card, session, player)
}

/// One running engagement.
///
/// ## Example
///
/// ```
/// use engagement_engine::cards::{CardDefinition, CardRegistry};
/// use engagement_engine::content::{EngagementDeck, EngagementType, PlayerProfile};
/// use engagement_engine::core::EngineConfig;
/// use engagement_engine::session::Engagement;
/// use engagement_engine::systems::{Mental, MentalCategory, Method};
///
/// let mut registry: CardRegistry<Mental> = CardRegistry::new();
/// registry
///     .register_with(|id| CardDefinition::new(id, "note", "Take Notes", 1, MentalCategory::Analytical, Method::Careful))
///     .unwrap();
///
/// let kind = EngagementType::new("study", "study_deck", 6, 5, 3, 7).unwrap();
/// let deck = EngagementDeck::new("study_deck").with_cards(["note", "note", "note", "note"]);
///
/// let mut engagement = Engagement::start(&kind, &deck, &registry, PlayerProfile::new(), &[], 7, EngineConfig::default()).unwrap();
/// let first = engagement.hand().next().unwrap().id;
///
/// let turn = engagement.play(first);
/// assert!(!turn.is_rejected());
/// assert_eq!(engagement.session().progress(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Engagement<'a, S: System> {
    registry: &'a CardRegistry<S>,
    engagement: EngagementType,
    player: PlayerProfile,
    deck: SessionDeck,
    session: EngagementSession<S>,
    goal: Option<String>,
    filtered: Vec<String>,
}

impl<'a, S: System> Engagement<'a, S> {
    /// Build the deck and session for an engagement and deal the opening hand.
    pub fn start(
        engagement: &EngagementType,
        deck_def: &EngagementDeck,
        registry: &'a CardRegistry<S>,
        player: PlayerProfile,
        goals: &[GoalCard],
        seed: u64,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        engagement.validate()?;
        if deck_def.id != engagement.deck_id {
            return Err(EngineError::DeckMismatch {
                engagement: engagement.id.clone(),
                deck: deck_def.id.clone(),
            });
        }

        let mut ids = InstanceAllocator::new();
        let built = deck_def.build_instances(registry, &player, &mut ids)?;
        let mut deck = SessionDeck::create_from_instances(built.draw, built.starting_hand, seed);
        for goal in goals {
            deck.add_gated(goal.instantiate(&mut ids));
        }

        let mut session = EngagementSession::new(engagement.victory_threshold, engagement.danger_threshold, config)
            .with_understanding(player.understanding);
        session.check_and_unlock_tiers();

        let mut this = Self {
            registry,
            engagement: engagement.clone(),
            player,
            deck,
            session,
            goal: None,
            filtered: built.filtered,
        };
        this.draw_accessible(engagement.initial_hand_size as usize);
        let progress = u32::try_from(this.session.progress()).unwrap_or(0);
        this.deck.check_gated_thresholds(progress);
        this.refresh_playability();

        info!(
            system = %S::KIND,
            engagement = %this.engagement.id,
            deck = this.deck.counts().deck,
            hand = this.deck.counts().hand,
            goals = goals.len(),
            filtered = this.filtered.len(),
            "engagement started"
        );
        Ok(this)
    }

    // === Accessors ===

    #[must_use]
    pub fn session(&self) -> &EngagementSession<S> {
        &self.session
    }

    #[must_use]
    pub fn deck(&self) -> &SessionDeck {
        &self.deck
    }

    #[must_use]
    pub fn engagement_type(&self) -> &EngagementType {
        &self.engagement
    }

    #[must_use]
    pub fn player(&self) -> &PlayerProfile {
        &self.player
    }

    /// Cards in hand, in hand order.
    pub fn hand(&self) -> impl Iterator<Item = &CardInstance> {
        self.deck.hand().iter()
    }

    /// Definition behind a copy, or `None` for goal cards.
    #[must_use]
    pub fn definition_of(&self, card: &CardInstance) -> Option<&'a CardDefinition<S>> {
        card.card_id().and_then(|id| self.registry.get(id))
    }

    /// True once a threshold fired or a goal card was played.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.goal.is_some() || self.session.should_end()
    }

    /// How the engagement ended, if it has. Thresholds take precedence.
    #[must_use]
    pub fn outcome(&self) -> Option<EngagementOutcome> {
        self.session
            .outcome()
            .or_else(|| self.goal.as_ref().map(|_| EngagementOutcome::GoalCompleted))
    }

    /// Project a hand card without playing it.
    #[must_use]
    pub fn preview(&self, id: InstanceId, action: ActionKind) -> Option<EffectProjection> {
        let card = self.deck.hand().get(id)?;
        let def = self.definition_of(card)?;
        Some(project(def, &self.session, &self.player.modifiers, action))
    }

    // === Turns ===

    /// Play a card from hand.
    pub fn play(&mut self, id: InstanceId) -> TurnResult {
        let action = TurnAction::Play(id);
        let before = self.session.snapshot();

        if self.is_ended() {
            return self.reject(action, PlayRejection::SessionEnded);
        }
        let Some(card) = self.deck.hand().get(id) else {
            return self.reject(action, PlayRejection::NotInHand);
        };

        if let CardKind::Goal { key, .. } = &card.kind {
            let key = key.clone();
            self.deck.play_card(id);
            self.session.next_turn();
            debug!(system = %S::KIND, goal = %key, "goal card played");
            self.goal = Some(key);
            self.refresh_playability();

            let mut result = TurnResult::new(action, self.session.snapshot());
            result.goal_completed = true;
            result.outcome = self.outcome();
            return result;
        }

        let Some(def) = self.definition_of(card) else {
            return self.reject(action, PlayRejection::UnknownDefinition);
        };
        if !is_accessible(def, &self.session, &self.player) {
            let max_depth = max_reachable_depth(def, &self.session, &self.player);
            return self.reject(action, PlayRejection::DepthLocked { depth: def.depth, max_depth });
        }

        let projection = project(def, &self.session, &self.player.modifiers, ActionKind::Play);
        if !self.session.can_afford(projection.cost_paid) {
            let have = self.session.builder();
            return self.reject(action, PlayRejection::InsufficientResource { need: projection.cost_paid, have });
        }

        self.deck.play_card(id);
        self.session.apply_builder(projection.builder_change);
        self.session.shift_balance(projection.balance_change);
        self.session.record_category(def.category);

        match S::RESOLUTION {
            Resolution::Immediate => {
                self.session.apply_progress(projection.progress_change);
                self.session.apply_loss(projection.loss_change);
                self.session.gain_understanding(projection.understanding_change);
                self.session.add_leads(projection.leads_gained);
            }
            Resolution::Deferred => {
                if let Some(locked) = self.deck.played_mut().get_mut(id) {
                    locked.set_param(PENDING_PROGRESS, i64::from(projection.progress_change));
                    locked.set_param(PENDING_LOSS, i64::from(projection.loss_change));
                    locked.set_param(PENDING_UNDERSTANDING, i64::from(projection.understanding_change));
                }
            }
        }

        let mut result = TurnResult::new(action, before);
        result.projection = Some(projection);
        result.strategic.add(&projection);
        self.finish_turn(result, before)
    }

    /// Take the system's recovery action.
    pub fn recover(&mut self) -> TurnResult {
        let action = TurnAction::Recover;
        let before = self.session.snapshot();

        if self.is_ended() {
            return self.reject(action, PlayRejection::SessionEnded);
        }

        let mut result = TurnResult::new(action, before);
        let draw_count = self.session.get_draw_count() as usize;
        let recover_balance = self.session.config().recover_balance;

        match S::RECOVERY {
            RecoveryRule::ClearLoss => {
                let cleared = self.session.clear_loss();
                self.session.apply_progress(-cleared);
                result.unlocked_tiers.extend(self.session.check_and_unlock_tiers());

                let pressure = self.session.balance();
                if pressure > 0 {
                    let room = self.session.max_loss() - self.session.loss();
                    self.session.apply_loss(pressure.min(room));
                }
                result.drawn = self.draw_accessible(draw_count);
                self.session.shift_balance(recover_balance);
                debug!(system = %S::KIND, cleared, pressure, "loss cleared");
            }
            RecoveryRule::SpendLeads => {
                let leads = self.session.take_leads();
                result.drawn = self.draw_accessible(draw_count + leads as usize);
                self.session.shift_balance(recover_balance);
                debug!(system = %S::KIND, leads, "leads spent");
            }
            RecoveryRule::ResolveCombo => {
                result.resolved = self.resolve_locked(recover_balance);
                self.deck.reshuffle_into_deck();
                result.drawn = self.draw_accessible(draw_count);
                debug!(system = %S::KIND, resolved = result.resolved.len(), "combo resolved");
            }
        }

        result.returned = self.deck.discard_down(self.engagement.max_hand_size as usize);
        self.finish_turn(result, before)
    }

    /// Mark each hand card playable iff it is reachable and affordable.
    pub fn refresh_playability(&mut self) {
        let registry = self.registry;
        let session = &self.session;
        let player = &self.player;
        let ended = self.goal.is_some() || session.should_end();

        for card in self.deck.hand_mut().iter_mut() {
            card.playable = !ended
                && match card.card_id().and_then(|id| registry.get(id)) {
                    Some(def) => {
                        let cost = (def.effects.cost + player.modifiers.cost_modifier).max(0);
                        is_accessible(def, session, player) && session.can_afford(cost)
                    }
                    // Goal cards in hand have already been released.
                    None => card.is_goal(),
                };
        }
    }

    /// Finish the engagement and report its counters.
    pub fn end(mut self) -> EngagementSummary<S> {
        let outcome = self.outcome().unwrap_or(EngagementOutcome::Abandoned);
        let final_piles = self.deck.counts();
        self.deck.clear();

        info!(
            system = %S::KIND,
            engagement = %self.engagement.id,
            ?outcome,
            turns = self.session.turns(),
            progress = self.session.progress(),
            loss = self.session.loss(),
            "engagement ended"
        );

        EngagementSummary {
            system: S::KIND,
            engagement_id: self.engagement.id,
            outcome,
            final_resources: self.session.snapshot(),
            category_counts: self.session.category_counts().clone(),
            turns: self.session.turns(),
            goal: self.goal,
            filtered_cards: self.filtered,
            final_piles,
        }
    }

    // === Internals ===

    fn reject(&self, action: TurnAction, reason: PlayRejection) -> TurnResult {
        debug!(system = %S::KIND, ?action, ?reason, "turn rejected");
        TurnResult::rejected(action, self.session.snapshot(), reason)
    }

    /// Draw up to `count` cards the player can currently reach.
    fn draw_accessible(&mut self, count: usize) -> MovedCards {
        let registry = self.registry;
        let session = &self.session;
        let player = &self.player;
        self.deck.draw_to_hand_where(count, |card| match card.card_id().and_then(|id| registry.get(id)) {
            Some(def) => is_accessible(def, session, player),
            None => true,
        })
    }

    /// Apply and clear the parked effects of every locked card.
    ///
    /// Each resolved card also shifts balance by the recovery shift plus its
    /// own approach shift.
    fn resolve_locked(&mut self, recover_balance: i32) -> MovedCards {
        let registry = self.registry;
        let mut resolved = MovedCards::new();
        let mut progress = 0i64;
        let mut loss = 0i64;
        let mut understanding = 0i64;
        let mut balance = 0i64;
        for card in self.deck.played_mut().iter_mut() {
            let Some(def) = card.card_id().and_then(|id| registry.get(id)) else {
                continue;
            };
            progress += card.take_param(PENDING_PROGRESS);
            loss += card.take_param(PENDING_LOSS);
            understanding += card.take_param(PENDING_UNDERSTANDING);
            balance += i64::from(recover_balance + def.method_type().balance_shift());
            resolved.push(card.id);
        }

        let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        self.session.apply_progress(clamp(progress));
        self.session.apply_loss(clamp(loss));
        self.session.gain_understanding(clamp(understanding));
        self.session.shift_balance(clamp(balance));
        resolved
    }

    fn finish_turn(&mut self, mut result: TurnResult, before: ResourceSnapshot) -> TurnResult {
        result.unlocked_tiers.extend(self.session.check_and_unlock_tiers());
        let progress = u32::try_from(self.session.progress()).unwrap_or(0);
        result.released = self.deck.check_gated_thresholds(progress);
        self.session.next_turn();
        self.refresh_playability();

        result.resources = self.session.snapshot();
        result.changes = result.resources.delta_since(&before);
        result.outcome = self.session.outcome();
        if let Some(outcome) = result.outcome {
            debug!(system = %S::KIND, ?outcome, "threshold reached");
        }
        result
    }
}
