//! STM32F103 Blue Pill Button/Touch-Slider LED Fusion
//! =============================================================================================
//!
//! Two pushbuttons and a four-pad touch slider decide which of two LEDs are lit.
//!
//! Hardware Connections:
//!   Buttons (to GND, internal pull-up):
//!      PB0  -> PA0 (EXTI0)
//!      PB1  -> PA1 (EXTI1)
//!
//!   LEDs (active-high, through a resistor to GND):
//!      LED0 -> PB12
//!      LED1 -> PB13
//!
//!   Touch pads (TTP223 modules, OUT pin active-high), left to right:
//!      PAD0 -> PA4
//!      PAD1 -> PA5
//!      PAD2 -> PA6
//!      PAD3 -> PA7
//!
//!   Mode select jumper:
//!      PB9 open     -> polling (sample every 100 ms, busy-wait in between)
//!      PB9 to GND   -> interrupt driven (button edges + SysTick events)
//!
//! The onboard LED (PC13) blinks as a heartbeat in interrupt-driven mode only;
//! polling mode never yields the core.

#![no_std]
#![no_main]

use cortex_m_rt::exception;
use defmt_rtt as _; // Global logger
use embassy_executor::Spawner;
use embassy_stm32::{
    exti::ExtiInput,
    gpio::{Input, Level, Output, Pull, Speed},
    time::Hertz,
};
use embassy_time::{Duration, Ticker};
use panic_probe as _; // Panic handler

use touch_fusion::{
    ButtonId, ButtonLevels, Buttons, Controller, EventDriven, FusionConfig, Polling,
    SchedulingMode, TickCounter, TickSignal,
    config::{SYSCLK_HZ, TICK_HZ},
    halt,
    hardware::{ActiveLevel, GpioButton, GpioLed, GpioTouchPads, systick::start_systick, traits::Led},
    scheduler::event::forward_button_edges,
};

// Millisecond count, advanced by SysTick
static TICKS: TickCounter = TickCounter::new();

// Latest tick for the event-driven scheduler; nobody waits on it when polling
static TICK_EVENTS: TickSignal = TickSignal::new();

// Button levels latched by the edge tasks
static BUTTONS: ButtonLevels = ButtonLevels::new();

#[exception]
fn SysTick() {
    let now = TICKS.tick();
    TICK_EVENTS.signal(now);
}

/// Main application entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    // HSE 8MHz, PLL x9 -> 72MHz SYSCLK
    let mut config = embassy_stm32::Config::default();
    {
        use embassy_stm32::rcc::*;
        config.rcc.hse = Some(Hse {
            freq: Hertz(8_000_000),
            mode: HseMode::Oscillator,
        });
        config.rcc.pll = Some(Pll {
            src: PllSource::HSE,
            prediv: PllPreDiv::DIV1,
            mul: PllMul::MUL9,
        });
        config.rcc.sys = Sysclk::PLL1_P;
        config.rcc.ahb_pre = AHBPrescaler::DIV1;
        config.rcc.apb1_pre = APBPrescaler::DIV2;
        config.rcc.apb2_pre = APBPrescaler::DIV1;
    }
    let p = embassy_stm32::init(config);

    let Some(mut core) = cortex_m::Peripherals::take() else {
        defmt::error!("core peripherals already taken");
        halt();
    };
    if let Err(e) = start_systick(&mut core.SYST, SYSCLK_HZ, TICK_HZ) {
        defmt::error!("tick timer rejected: {}", e);
        halt();
    }

    let settings = FusionConfig::default();

    // Read the jumper once; the mode stays fixed until reset
    let mode = {
        let select = Input::new(p.PB9, Pull::Up);
        SchedulingMode::from_select_level(select.is_low())
    };
    defmt::info!("starting in {} mode, {}", mode, settings);

    // LEDs start off; the controller drives them off again on takeover
    let led0 = GpioLed::new(Output::new(p.PB12, Level::Low, Speed::Low), ActiveLevel::High);
    let led1 = GpioLed::new(Output::new(p.PB13, Level::Low, Speed::Low), ActiveLevel::High);

    let pads = GpioTouchPads::new([
        Input::new(p.PA4, Pull::Down),
        Input::new(p.PA5, Pull::Down),
        Input::new(p.PA6, Pull::Down),
        Input::new(p.PA7, Pull::Down),
    ]);

    let controller = Controller::new(pads, led0, led1);

    match mode {
        SchedulingMode::Polling => {
            let buttons = Buttons::new(
                GpioButton::new(Input::new(p.PA0, Pull::Up)),
                GpioButton::new(Input::new(p.PA1, Pull::Up)),
            );
            Polling::new(buttons, &TICKS, settings).run(controller)
        }
        SchedulingMode::InterruptDriven => {
            let pb0 = GpioButton::new(ExtiInput::new(p.PA0, p.EXTI0, Pull::Up));
            let pb1 = GpioButton::new(ExtiInput::new(p.PA1, p.EXTI1, Pull::Up));

            spawner
                .spawn(button_edges(pb0, ButtonId::Pb0))
                .expect("Failed to spawn PB0 task");
            spawner
                .spawn(button_edges(pb1, ButtonId::Pb1))
                .expect("Failed to spawn PB1 task");

            let heartbeat = GpioLed::new(Output::new(p.PC13, Level::High, Speed::Low), ActiveLevel::Low);
            spawner
                .spawn(heartbeat_task(heartbeat, Duration::from_millis(500)))
                .expect("Failed to spawn heartbeat task");

            EventDriven::new(&TICK_EVENTS, &BUTTONS, settings)
                .run(controller)
                .await
        }
    }
}

/// Button Edge Task
///
/// Waits for either edge on one button and latches its new level.
#[embassy_executor::task(pool_size = 2)]
async fn button_edges(button: GpioButton<ExtiInput<'static>>, id: ButtonId) {
    if forward_button_edges(button, id, &BUTTONS).await.is_err() {
        defmt::error!("{} edge watch stopped, level frozen", id);
    }
}

/// Heartbeat Task
///
/// Toggles the onboard LED while the event-driven scheduler sleeps.
#[embassy_executor::task]
async fn heartbeat_task(mut led: GpioLed<Output<'static>>, period: Duration) {
    let mut ticker = Ticker::every(period);
    loop {
        led.toggle();
        ticker.next().await;
    }
}
