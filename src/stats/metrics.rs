use super::Profile;
use crate::Chips;
use crate::Count;
use crate::Percent;
use crate::Ratio;
use crate::gameplay::Kind;

/// `100 * n / d`, or `zero` when nothing was observed
fn percent(n: Count, d: Count, zero: Percent) -> Percent {
    match d {
        0 => zero,
        d => (n as Percent * 100.) / d as Percent,
    }
}

/// Derived metrics. All are pure reads of the raw counters.
///
/// Frequencies over all hands are 0 for a player with no hands.
/// Rates conditioned on an opportunity (initiative given a street was
/// seen, wins given a showdown, aggression given a passive action)
/// are NaN when there was no opportunity.
impl Profile {
    /// initiative percentage per street seen
    pub fn initiatives(&self) -> Vec<Percent> {
        self.streetinits
            .iter()
            .zip(self.streetsseen.iter())
            .map(|(inits, seen)| percent(*inits, *seen, Percent::NAN))
            .collect()
    }
    /// initiatives per street, e.g. `"25-40-NaN-NaN"`
    pub fn isstr(&self) -> String {
        self.initiatives()
            .iter()
            .map(|p| format!("{:2.0}", p))
            .collect::<Vec<_>>()
            .join("-")
    }
    /// flops seen as percentage of hands
    pub fn fs(&self) -> Percent {
        match self.streetsseen.get(1) {
            Some(flops) => percent(*flops, self.hands, 0.),
            None => 0.,
        }
    }
    /// showdowns seen as percentage of hands
    pub fn ss(&self) -> Percent {
        percent(self.showdownsseen, self.hands, 0.)
    }
    /// showdowns won as percentage of showdowns seen
    pub fn sw(&self) -> Percent {
        percent(self.handswonshow, self.showdownsseen, Percent::NAN)
    }
    /// hands won as percentage of hands
    pub fn hw(&self) -> Percent {
        percent(self.handswon, self.hands, 0.)
    }
    /// preflop raise as percentage of hands
    pub fn pfr(&self) -> Percent {
        percent(self.pfr, self.hands, 0.)
    }
    /// voluntarily put money in pot as percentage of hands
    pub fn vpip(&self) -> Percent {
        percent(self.vpip, self.hands, 0.)
    }

    /// (check-fold, check-call, check-raise)
    pub fn checks(&self) -> (Count, Count, Count) {
        (self.checkfold, self.checkcall, self.checkraise)
    }
    pub fn cx(&self) -> String {
        let (f, c, r) = self.checks();
        format!("{}-{}-{}", f, c, r)
    }
    /// check-fold, check-call, check-raise as percentages of all checks
    pub fn check_ratios(&self) -> Option<(Percent, Percent, Percent)> {
        let checks = self.actions(Kind::Check);
        match checks {
            0 => None,
            n => Some((
                percent(self.checkfold, n, 0.),
                percent(self.checkcall, n, 0.),
                percent(self.checkraise, n, 0.),
            )),
        }
    }
    pub fn cxr(&self) -> String {
        match self.check_ratios() {
            Some((f, c, r)) => format!("{:2.0}-{:2.0}-{:2.0}", f, c, r),
            None => String::new(),
        }
    }

    /// aggression factor: (bets + raises) / calls,
    /// counting checks as passive too when `checks` is set
    pub fn af(&self, checks: bool) -> Ratio {
        let aggressive = self.actions(Kind::Bet) + self.actions(Kind::Raise);
        let passive = match checks {
            true => self.actions(Kind::Call) + self.actions(Kind::Check),
            false => self.actions(Kind::Call),
        };
        match passive {
            0 => Ratio::NAN,
            p => aggressive as Ratio / p as Ratio,
        }
    }

    /// net amount won
    pub fn am(&self) -> Chips {
        self.won - self.pip
    }
    /// net amount won per hand
    pub fn amph(&self) -> Ratio {
        match self.hands {
            0 => 0.,
            n => self.am() as Ratio / n as Ratio,
        }
    }
}
