use crate::storage::select_store;
use bingo_core as game;
use game::{GameSession, GameState, KeyValueStore, SquareId, Transition};
use std::collections::BTreeSet;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    StartGame,
    MarkSquare(SquareId),
    ResetGame,
}

#[derive(Properties, Clone, PartialEq)]
struct SquareProps {
    square: game::Square,
    #[prop_or_default]
    winning: bool,
    #[prop_or_default]
    locked: bool,
    callback: Callback<SquareId>,
}

#[function_component(SquareView)]
fn square_component(props: &SquareProps) -> Html {
    let SquareProps {
        square,
        winning,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!("square");
    if square.is_marked {
        class.push("marked");
    }
    if square.is_free_space {
        class.push("free");
    }
    if winning {
        class.push("winning");
    }
    if locked || !square.can_toggle() {
        class.push("locked");
    }

    let id = square.id;
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("square {} clicked", id);
        callback.emit(id);
    });

    html! {
        <td {class} {onclick}>{square.text}</td>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub seed: u64,
    pub prompts: game::PromptPool,
}

pub(crate) struct GameView {
    session: GameSession<Box<dyn KeyValueStore>>,
    error: Option<String>,
}

impl GameView {
    fn state_class(&self) -> &'static str {
        match self.session.state() {
            GameState::Start => "not-started",
            GameState::Playing => "in-progress",
            GameState::Bingo => "win",
        }
    }

    fn view_board(&self, ctx: &Context<Self>, board: &game::Board) -> Html {
        let winning: BTreeSet<SquareId> = self.session.winning_square_ids();
        let locked = self.session.state().is_finished();
        let callback = ctx.link().callback(Msg::MarkSquare);

        html! {
            <table class={classes!("board", (!locked).then_some("playable"))}>
                {
                    for board.rows().map(|row| html! {
                        <tr>
                            {
                                for row.iter().map(|square| {
                                    let winning = winning.contains(&square.id);
                                    html! {
                                        <SquareView
                                            square={square.clone()}
                                            {winning}
                                            {locked}
                                            callback={callback.clone()}
                                        />
                                    }
                                })
                            }
                        </tr>
                    })
                }
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { seed, prompts } = ctx.props().clone();
        Self {
            session: GameSession::restore(select_store(), prompts, seed),
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        log::debug!("{:?} in state {:?}", msg, self.session.state());
        let transition = match msg {
            StartGame => match self.session.start_game() {
                Ok(transition) => transition,
                Err(err) => {
                    log::error!("could not start game: {}", err);
                    self.error = Some(err.to_string());
                    return true;
                }
            },
            MarkSquare(id) => self.session.mark_square(id),
            ResetGame => {
                self.error = None;
                self.session.reset_game()
            }
        };

        if transition == Transition::Bingo {
            log::info!("bingo!");
        }
        transition.has_update()
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let cb_start = ctx.link().callback(|_: MouseEvent| StartGame);
        let cb_reset = ctx.link().callback(|_: MouseEvent| ResetGame);

        let body = match self.session.board() {
            None => html! {
                <section class="start">
                    <h1>{"Social Bingo"}</h1>
                    <p>{"Find people who match the prompts and mark them off. Five in a row wins."}</p>
                    <button onclick={cb_start}>{"Start game"}</button>
                    if let Some(error) = &self.error {
                        <p class="error">{error.clone()}</p>
                    }
                </section>
            },
            Some(board) => html! {
                <>
                    if self.session.state().is_finished() {
                        <dialog open={true}>
                            <h2>{"BINGO!"}</h2>
                            <button onclick={cb_reset.clone()}>{"Play again"}</button>
                        </dialog>
                    }
                    {self.view_board(ctx, board)}
                    <nav>
                        <button onclick={cb_reset}>{"Back to start"}</button>
                    </nav>
                </>
            },
        };

        html! {
            <div class={classes!("bingo", self.state_class())}>
                {body}
            </div>
        }
    }
}
