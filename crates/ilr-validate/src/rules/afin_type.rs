use ilr_core::predicates::{has_fund_model, latest_fin_record};
use ilr_model::codes::fund_model;
use ilr_model::{AFinType, Learner};

use super::date_parameter;
use crate::handler::{ValidationErrorHandler, param};
use crate::rule::Rule;

/// Total negotiated price code for training.
const TNP_TRAINING_PRICE: i32 = 1;

/// The latest training price on an apprenticeship programme aim must not be
/// dated after the aim's actual end date.
#[derive(Debug, Clone, Copy, Default)]
pub struct AFinType10;

impl Rule for AFinType10 {
    fn name(&self) -> &'static str {
        "AFinType_10"
    }

    fn validate(&self, learner: &Learner, handler: &dyn ValidationErrorHandler) {
        for delivery in &learner.learning_deliveries {
            if !delivery.is_programme_aim()
                || !has_fund_model(delivery, &[fund_model::APPRENTICESHIPS])
            {
                continue;
            }
            let Some(end) = delivery.learn_act_end_date else {
                continue;
            };
            let Some(record) =
                latest_fin_record(&delivery.app_fin_records, AFinType::Tnp, TNP_TRAINING_PRICE)
            else {
                continue;
            };
            if record.afin_date <= end {
                continue;
            }
            self.report(
                handler,
                learner,
                Some(delivery.aim_seq_number),
                vec![
                    handler.build_parameter(param::AFIN_TYPE, &record.afin_type),
                    handler.build_parameter(param::AFIN_CODE, &record.afin_code),
                    date_parameter(handler, param::AFIN_DATE, record.afin_date),
                    date_parameter(handler, param::LEARN_ACT_END_DATE, end),
                ],
            );
        }
    }
}
