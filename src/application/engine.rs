use crate::domain::command::{Command, CommandKind};
use crate::domain::event::LedgerEvent;
use crate::domain::money::{Amount, Balance};
use crate::domain::payment::Payment;
use crate::domain::ports::{PaymentStoreBox, StallStoreBox};
use crate::domain::stall::{Address, Stall, StallId};
use crate::error::{LedgerError, Result};
use tokio::sync::Mutex;

/// The stall-payment ledger.
///
/// `StallLedger` maintains per-stall ownership, balance and withdrawal
/// status, plus per-(stall, buyer) payment amounts. It owns the storage
/// backends and an event buffer; every operation takes the caller's address
/// explicitly and runs to completion before any other operation observes its
/// effects.
pub struct StallLedger {
    admin: Address,
    stall_store: StallStoreBox,
    payment_store: PaymentStoreBox,
    next_id: Mutex<StallId>,
    events: Mutex<Vec<LedgerEvent>>,
}

impl StallLedger {
    /// Creates a ledger administered by `admin`.
    ///
    /// Only the administrator may issue refunds or withdraw stall funds.
    pub fn new(admin: Address, stall_store: StallStoreBox, payment_store: PaymentStoreBox) -> Self {
        Self {
            admin,
            stall_store,
            payment_store,
            next_id: Mutex::new(1),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Registers a new stall owned by the caller and returns its id.
    ///
    /// Identifiers are dense and start at 1; the first registration in a
    /// fresh ledger yields stall 1.
    pub async fn register_stall(&self, caller: Address, category: u32) -> Result<StallId> {
        // The counter advances only after a successful store, so a failed
        // write cannot leave a gap in the id sequence.
        let mut next_id = self.next_id.lock().await;
        let id = *next_id;
        self.stall_store
            .store(Stall::new(id, caller, category))
            .await?;
        *next_id += 1;
        Ok(id)
    }

    /// Credits the attached amount to the stall's balance and to the calling
    /// buyer's payment record.
    pub async fn make_payment(
        &self,
        caller: Address,
        stall_id: StallId,
        amount: Amount,
    ) -> Result<()> {
        let mut stall = self.require_stall(stall_id).await?;
        let mut payment = self
            .payment_store
            .get(stall_id, &caller)
            .await?
            .unwrap_or_else(|| Payment::new(stall_id, caller));

        stall.credit(amount.into());
        payment.add(amount.into());

        self.stall_store.store(stall).await?;
        self.payment_store.store(payment).await?;
        Ok(())
    }

    /// Returns a buyer's recorded payment to them, zeroing the record and
    /// debiting the stall by the same amount. Administrator only.
    pub async fn issue_refund(
        &self,
        caller: Address,
        stall_id: StallId,
        buyer: Address,
    ) -> Result<()> {
        self.require_admin(&caller)?;
        let mut stall = self.require_stall(stall_id).await?;
        let mut payment = self
            .payment_store
            .get(stall_id, &buyer)
            .await?
            .filter(|payment| !payment.is_zero())
            .ok_or_else(|| LedgerError::NoPaymentOnRecord {
                stall: stall_id,
                buyer: buyer.clone(),
            })?;

        let refunded = payment.refund();
        stall.debit(refunded)?;

        self.stall_store.store(stall).await?;
        self.payment_store.store(payment).await?;
        self.emit(LedgerEvent::RefundIssued {
            stall: stall_id,
            buyer,
            amount: refunded,
        })
        .await;
        Ok(())
    }

    /// Pays out a stall's entire balance to its owner, zeroing the balance
    /// and latching the withdrawn flag. Administrator only.
    pub async fn withdraw_funds(&self, caller: Address, stall_id: StallId) -> Result<()> {
        self.require_admin(&caller)?;
        let mut stall = self.require_stall(stall_id).await?;
        if stall.balance.is_zero() {
            return Err(LedgerError::NothingToWithdraw(stall_id));
        }

        let amount = stall.withdraw_all();
        let recipient = stall.owner.clone();

        self.stall_store.store(stall).await?;
        self.emit(LedgerEvent::FundsWithdrawn {
            stall: stall_id,
            recipient,
            amount,
        })
        .await;
        Ok(())
    }

    /// Dispatches one parsed command row to the operation it names.
    pub async fn execute(&self, cmd: Command) -> Result<()> {
        match cmd.op {
            CommandKind::Register => {
                let category = cmd.category()?;
                self.register_stall(cmd.caller, category).await?;
                Ok(())
            }
            CommandKind::Pay => {
                let stall = cmd.stall_id()?;
                let amount = cmd.amount()?;
                self.make_payment(cmd.caller, stall, amount).await
            }
            CommandKind::Refund => {
                let stall = cmd.stall_id()?;
                let buyer = cmd.buyer()?;
                self.issue_refund(cmd.caller, stall, buyer).await
            }
            CommandKind::Withdraw => {
                let stall = cmd.stall_id()?;
                self.withdraw_funds(cmd.caller, stall).await
            }
        }
    }

    /// Looks up a stall by id.
    pub async fn stall(&self, id: StallId) -> Result<Option<Stall>> {
        self.stall_store.get(id).await
    }

    /// A buyer's currently attributed payment amount, zero when no record
    /// exists.
    pub async fn payment(&self, stall_id: StallId, buyer: &Address) -> Result<Balance> {
        Ok(self
            .payment_store
            .get(stall_id, buyer)
            .await?
            .map(|payment| payment.amount)
            .unwrap_or(Balance::ZERO))
    }

    /// Drains events emitted since the last call, in emission order.
    pub async fn drain_events(&self) -> Vec<LedgerEvent> {
        std::mem::take(&mut *self.events.lock().await)
    }

    /// Consumes the ledger and returns the final state of all stalls,
    /// ordered by id.
    pub async fn into_results(self) -> Result<Vec<Stall>> {
        let mut stalls = self.stall_store.get_all().await?;
        stalls.sort_by_key(|stall| stall.id);
        Ok(stalls)
    }

    fn require_admin(&self, caller: &Address) -> Result<()> {
        if caller == &self.admin {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized(caller.clone()))
        }
    }

    async fn require_stall(&self, id: StallId) -> Result<Stall> {
        self.stall_store
            .get(id)
            .await?
            .ok_or(LedgerError::StallNotFound(id))
    }

    async fn emit(&self, event: LedgerEvent) {
        self.events.lock().await.push(event);
    }
}
